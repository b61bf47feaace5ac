use std::time::{Duration, Instant};

use mapcrate_server::{shared::Vec3, HostEvent, MarkerConfig, MarkerServer};
use mapcrate_test::{TestSessions, TestTransport, TestWorld};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Server with three marked crates; every marker has had its creation
/// broadcast already.
fn marked_server() -> (MarkerServer<TestTransport>, TestTransport, TestWorld) {
    let transport = TestTransport::new();
    let mut server = MarkerServer::new(MarkerConfig::default(), transport.clone());
    let mut world = TestWorld::new();
    for id in 1..=3 {
        world.spawn_crate(id, Vec3::new(id as f32 * 300.0, 0.0, 0.0));
    }
    server.on_init(&world);
    (server, transport, world)
}

#[test]
fn connected_observer_gets_one_rebroadcast_per_marker() {
    init_logger();
    let (mut server, transport, _world) = marked_server();
    let mut sessions = TestSessions::new();
    let start = Instant::now();

    let observer = sessions.connect(1);
    server.on_observer_join(observer, start);

    let ran = server.update(&(start + Duration::from_secs(2)), &sessions);

    assert_eq!(ran, 1);
    for marker in transport.live_markers() {
        assert_eq!(transport.broadcast_count(&marker), 2);
    }
}

#[test]
fn rebroadcast_waits_for_delay() {
    let (mut server, transport, _world) = marked_server();
    let mut sessions = TestSessions::new();
    let start = Instant::now();
    let observer = sessions.connect(1);
    server.on_observer_join(observer, start);

    assert_eq!(server.update(&(start + Duration::from_millis(1999)), &sessions), 0);
    assert_eq!(transport.total_broadcasts(), 3);
    assert_eq!(server.pending_rebroadcasts(), 1);

    assert_eq!(server.update(&(start + Duration::from_secs(2)), &sessions), 1);
    assert_eq!(transport.total_broadcasts(), 6);
    assert_eq!(server.pending_rebroadcasts(), 0);
}

#[test]
fn rebroadcast_fires_once() {
    let (mut server, transport, _world) = marked_server();
    let mut sessions = TestSessions::new();
    let start = Instant::now();
    let observer = sessions.connect(1);
    server.on_observer_join(observer, start);

    server.update(&(start + Duration::from_secs(2)), &sessions);
    server.update(&(start + Duration::from_secs(10)), &sessions);

    assert_eq!(transport.total_broadcasts(), 6);
}

#[test]
fn disconnected_observer_gets_nothing() {
    let (mut server, transport, _world) = marked_server();
    let mut sessions = TestSessions::new();
    let start = Instant::now();
    let observer = sessions.connect(1);
    server.on_observer_join(observer, start);

    sessions.disconnect(&observer);
    let ran = server.update(&(start + Duration::from_secs(3)), &sessions);

    assert_eq!(ran, 0);
    assert_eq!(transport.total_broadcasts(), 3);
    assert_eq!(server.pending_rebroadcasts(), 0);
}

#[test]
fn each_joining_observer_schedules_its_own_rebroadcast() {
    let (mut server, transport, world) = marked_server();
    let mut sessions = TestSessions::new();
    let start = Instant::now();

    let first = sessions.connect(1);
    server.handle_event(&world, HostEvent::ObserverJoined(first), start);
    let second = sessions.connect(2);
    server.handle_event(
        &world,
        HostEvent::ObserverJoined(second),
        start + Duration::from_secs(1),
    );

    assert_eq!(server.update(&(start + Duration::from_secs(2)), &sessions), 1);
    assert_eq!(server.update(&(start + Duration::from_secs(3)), &sessions), 1);
    assert_eq!(transport.total_broadcasts(), 9);
}

#[test]
fn externally_killed_marker_is_skipped() {
    let (mut server, transport, _world) = marked_server();
    let mut sessions = TestSessions::new();
    let start = Instant::now();
    let killed = transport.live_markers()[0];
    transport.kill_externally(&killed);

    let observer = sessions.connect(1);
    server.on_observer_join(observer, start);
    server.update(&(start + Duration::from_secs(2)), &sessions);

    assert_eq!(transport.broadcast_count(&killed), 1);
    assert_eq!(transport.total_broadcasts(), 5);
}

#[test]
fn shutdown_cancels_pending_rebroadcast() {
    let (mut server, transport, _world) = marked_server();
    let mut sessions = TestSessions::new();
    let start = Instant::now();
    let observer = sessions.connect(1);
    server.on_observer_join(observer, start);

    server.shutdown();
    let ran = server.update(&(start + Duration::from_secs(5)), &sessions);

    assert_eq!(ran, 0);
    assert_eq!(server.pending_rebroadcasts(), 0);
    assert_eq!(transport.total_broadcasts(), 3);
    assert_eq!(transport.live_count(), 0);
}

#[test]
fn configured_delay_is_used() {
    let transport = TestTransport::new();
    let config = MarkerConfig::default().with_rebroadcast_delay(Duration::from_millis(500));
    let mut server = MarkerServer::new(config, transport.clone());
    let mut world = TestWorld::new();
    let entity = world.spawn_crate(1, Vec3::ZERO);
    server.on_spawn(&world, &entity);

    let mut sessions = TestSessions::new();
    let start = Instant::now();
    let observer = sessions.connect(1);
    server.on_observer_join(observer, start);

    assert_eq!(server.update(&(start + Duration::from_millis(500)), &sessions), 1);
    assert_eq!(transport.total_broadcasts(), 2);
}

#[test]
fn rebroadcast_with_no_markers_is_harmless() {
    let transport = TestTransport::new();
    let mut server = MarkerServer::new(MarkerConfig::default(), transport.clone());
    let mut sessions = TestSessions::new();
    let start = Instant::now();
    let observer = sessions.connect(1);
    server.on_observer_join(observer, start);

    assert_eq!(server.update(&(start + Duration::from_secs(2)), &sessions), 1);
    assert_eq!(transport.total_broadcasts(), 0);
}
