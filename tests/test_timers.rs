use std::time::Duration;

use sky_dodge::timers::SpawnTimer;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── Fire counting ─────────────────────────────────────────────────────────────

#[test]
fn no_fire_before_first_interval() {
    let mut t = SpawnTimer::new(ms(250));
    assert_eq!(t.poll(ms(0)), 0);
    assert_eq!(t.poll(ms(249)), 0);
}

#[test]
fn first_fire_exactly_at_interval() {
    let mut t = SpawnTimer::new(ms(250));
    assert_eq!(t.poll(ms(250)), 1);
}

#[test]
fn quarter_second_timer_fires_four_times_in_a_second() {
    // Due instants are t = k·interval and the boundary is inclusive:
    // polling at exactly 1000 ms reports the fire due at 1000 ms.
    let mut t = SpawnTimer::new(ms(250));
    assert_eq!(t.poll(ms(1000)), 4);
}

#[test]
fn boundary_is_inclusive() {
    let mut t = SpawnTimer::new(ms(250));
    assert_eq!(t.poll(ms(999)), 3);
    assert_eq!(t.poll(ms(1000)), 1);
}

#[test]
fn late_poll_catches_up() {
    let mut t = SpawnTimer::new(ms(250));
    assert_eq!(t.poll(ms(300)), 1);
    // nothing polled for a while — every missed fire arrives at once
    assert_eq!(t.poll(ms(1300)), 4);
}

#[test]
fn repoll_at_same_elapsed_is_idempotent() {
    let mut t = SpawnTimer::new(ms(250));
    assert_eq!(t.poll(ms(600)), 2);
    assert_eq!(t.poll(ms(600)), 0);
}

#[test]
fn fires_accumulate_across_polls() {
    let mut t = SpawnTimer::new(ms(250));
    let total: u32 = (1..=10).map(|i| t.poll(ms(i * 100))).sum();
    assert_eq!(total, 4); // same as one poll at 1000 ms
}

// ── Degenerate intervals ──────────────────────────────────────────────────────

#[test]
fn zero_interval_never_fires() {
    let mut t = SpawnTimer::new(ms(0));
    assert_eq!(t.poll(ms(1000)), 0);
}

#[test]
fn interval_accessor() {
    let t = SpawnTimer::new(ms(2000));
    assert_eq!(t.interval(), ms(2000));
}
