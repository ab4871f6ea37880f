use super::*;

#[test]
fn events_fire_in_due_order() {
    let mut host = VirtualHost::new(16);
    let t_late = host.set_timeout(100);
    let f = host.request_frame();
    let t_early = host.set_timeout(16);

    assert_eq!(host.next_due_ms(), Some(16));
    assert_eq!(host.pop_due(1000), Some(HostEvent::Frame(f)));
    assert_eq!(host.pop_due(1000), Some(HostEvent::Timer(t_early)));
    assert_eq!(host.now_ms(), 16);
    assert_eq!(host.pop_due(50), None);
    assert_eq!(host.pop_due(100), Some(HostEvent::Timer(t_late)));
    assert_eq!(host.now_ms(), 100);
    assert_eq!(host.pending_len(), 0);
}

#[test]
fn cancelled_events_never_fire() {
    let mut host = VirtualHost::default();
    let t = host.set_timeout(10);
    let f = host.request_frame();
    assert!(host.is_timer_armed(t));
    host.clear_timeout(t);
    host.cancel_frame(f);
    assert!(!host.is_timer_armed(t));
    assert_eq!(host.pop_due(u64::MAX), None);
}

#[test]
fn clock_only_moves_forward() {
    let mut host = VirtualHost::new(0);
    host.set_now(50);
    host.set_now(10);
    assert_eq!(host.now_ms(), 50);
    let t = host.set_timeout(5);
    assert_eq!(host.next_due_ms(), Some(55));
    assert_eq!(host.pop_due(55), Some(HostEvent::Timer(t)));
}
