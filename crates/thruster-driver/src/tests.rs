//! Tests for orders, scenarios, configuration, and the driver tick loop.

use thruster_core::constants::*;
use thruster_core::entity::Entity;
use thruster_core::property::PropertyStore;
use thruster_core::types::{EntityId, Vector};

use crate::config::{DriverConfig, ATOMIC_MOVES_VAR, SCENARIO_VAR, TICKS_VAR};
use crate::engine::Driver;
use crate::errors::DriverError;
use crate::orders::Order;
use crate::scenario::Scenario;

const SHIP: EntityId = EntityId(1);

fn ship() -> Entity {
    Entity::new(SHIP)
        .with(POSITION, Vector::new(0.0, 0.0))
        .with(VELOCITY, Vector::new(3.0, 4.0))
        .with(DIRECTION, 0_i64)
        .with(DIRECTION_NUMBER, 8_i64)
        .with(ANGULAR_VELOCITY, 2_i64)
        .with(VELOCITY_DIRECTION, 0_i64)
        .with(FUEL_IN_TANK, 15.0)
        .with(FUEL_CONSUMPTION, 1.0)
}

fn driver_with(entity: Entity, config: DriverConfig) -> Driver {
    let mut driver = Driver::new(config);
    driver.spawn(entity).unwrap();
    driver
}

// ---- Orders ----

#[test]
fn test_order_json_shape() {
    let order: Order = serde_json::from_str(r#"{"type":"MoveWithFuel","entity":4}"#).unwrap();
    assert_eq!(order, Order::MoveWithFuel { entity: EntityId(4) });
    assert_eq!(order.entity(), EntityId(4));
}

// ---- Tick loop ----

#[test]
fn test_single_order_runs_once() {
    let mut driver = driver_with(ship(), DriverConfig::default());
    driver.queue_order(Order::Rotate { entity: SHIP });

    let snapshot = driver.tick();
    assert!(snapshot.failures.is_empty());
    assert_eq!(snapshot.time.tick, 1);
    assert_eq!(
        snapshot.entity(1).unwrap().get_integer(DIRECTION).unwrap(),
        2
    );

    // Queue is drained; the next tick does nothing.
    driver.tick();
    assert_eq!(driver.entity(SHIP).unwrap().get_integer(DIRECTION).unwrap(), 2);
}

#[test]
fn test_orders_run_in_queue_order() {
    let mut driver = driver_with(ship(), DriverConfig::default());
    driver.queue_orders([
        Order::Rotate { entity: SHIP },
        Order::ChangeVelocityDirection { entity: SHIP },
        Order::Move { entity: SHIP },
    ]);

    driver.tick();

    let ship = driver.entity(SHIP).unwrap();
    assert_eq!(ship.get_integer(VELOCITY_DIRECTION).unwrap(), 2);
    let position = ship.get_vector(POSITION).unwrap();
    assert!((position - Vector::new(0.0, 4.0)).length() < 1e-9);
}

#[test]
fn test_scripted_moves_until_out_of_fuel() {
    let scenario = Scenario {
        entities: vec![ship()],
        script: vec![Order::MoveWithFuel { entity: SHIP }],
    };
    let mut driver = Driver::from_scenario(DriverConfig::default(), scenario).unwrap();

    for _ in 0..3 {
        let snapshot = driver.tick();
        assert!(snapshot.failures.is_empty());
    }
    let snapshot = driver.tick();

    assert_eq!(snapshot.failures.len(), 1);
    let failure = &snapshot.failures[0];
    assert_eq!(failure.code, "ERR_COMMAND_FAILED");
    assert_eq!(failure.cause, "ERR_NOT_ENOUGH_FUEL");

    let ship = snapshot.entity(1).unwrap();
    assert_eq!(ship.get_number(FUEL_IN_TANK).unwrap(), 0.0);
    assert_eq!(ship.get_vector(POSITION).unwrap(), Vector::new(9.0, 0.0));
}

#[test]
fn test_unknown_entity_is_reported() {
    let mut driver = driver_with(ship(), DriverConfig::default());
    driver.queue_order(Order::Move {
        entity: EntityId(99),
    });

    let snapshot = driver.tick();

    assert_eq!(snapshot.failures.len(), 1);
    assert_eq!(snapshot.failures[0].code, "ERR_UNKNOWN_ENTITY");
}

#[test]
fn test_failed_order_does_not_stop_the_tick() {
    let mut driver = driver_with(ship().with(FUEL_IN_TANK, 1.0), DriverConfig::default());
    driver.queue_orders([
        Order::CheckFuel { entity: SHIP },
        Order::Rotate { entity: SHIP },
    ]);

    let snapshot = driver.tick();

    assert_eq!(snapshot.failures.len(), 1);
    assert_eq!(snapshot.failures[0].code, "ERR_NOT_ENOUGH_FUEL");
    assert_eq!(
        snapshot.entity(1).unwrap().get_integer(DIRECTION).unwrap(),
        2
    );
}

#[test]
fn test_atomic_fuel_moves_restore_entity() {
    let config = DriverConfig {
        atomic_fuel_moves: true,
        ..Default::default()
    };
    let mut driver = driver_with(ship().lock(POSITION), config);
    driver.queue_order(Order::MoveWithFuel { entity: SHIP });

    let snapshot = driver.tick();

    assert_eq!(snapshot.failures[0].cause, "ERR_PROPERTY_ACCESS");
    let ship = snapshot.entity(1).unwrap();
    assert!(!ship.has_property(FUEL_FOR_NEXT_MOVE));
    assert_eq!(ship.get_number(FUEL_IN_TANK).unwrap(), 15.0);
}

#[test]
fn test_non_atomic_fuel_moves_leave_reservation() {
    let mut driver = driver_with(ship().lock(POSITION), DriverConfig::default());
    driver.queue_order(Order::MoveWithFuel { entity: SHIP });

    let snapshot = driver.tick();

    let ship = snapshot.entity(1).unwrap();
    assert_eq!(ship.get_number(FUEL_FOR_NEXT_MOVE).unwrap(), 5.0);
    assert_eq!(ship.get_number(FUEL_IN_TANK).unwrap(), 15.0);
}

#[test]
fn test_duplicate_entity_rejected() {
    let mut driver = driver_with(ship(), DriverConfig::default());
    let err = driver.spawn(ship()).unwrap_err();
    assert!(matches!(err, DriverError::DuplicateEntity(id) if id == SHIP));
}

#[test]
fn test_run_executes_configured_ticks() {
    let config = DriverConfig {
        ticks: 4,
        ..Default::default()
    };
    let scenario = Scenario {
        entities: vec![ship()],
        script: vec![Order::Rotate { entity: SHIP }],
    };
    let mut driver = Driver::from_scenario(config, scenario).unwrap();

    let snapshot = driver.run();

    assert_eq!(snapshot.time.tick, 4);
    assert_eq!(
        snapshot.entity(1).unwrap().get_integer(DIRECTION).unwrap(),
        0
    );
}

// ---- Scenario ----

#[test]
fn test_demo_scenario_runs_cleanly() {
    let scenario = Scenario::from_json(include_str!("../../../demos/scenario.json")).unwrap();
    assert_eq!(scenario.entities.len(), 2);
    assert!(scenario.unknown_properties().is_empty());

    let mut driver = Driver::from_scenario(DriverConfig::default(), scenario).unwrap();
    let snapshot = driver.tick();

    assert!(snapshot.failures.is_empty());
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"fuel_in_tank\":15.0"));
}

#[test]
fn test_scenario_flags_unknown_properties() {
    let scenario = Scenario::from_json(
        r#"{"entities":[{"id":3,"properties":{"positon":[0.0,0.0]}}]}"#,
    )
    .unwrap();

    assert_eq!(
        scenario.unknown_properties(),
        vec![(EntityId(3), "positon".to_string())]
    );
    assert!(scenario.script.is_empty());
}

#[test]
fn test_scenario_rejects_bad_json() {
    let err = Scenario::from_json("{\"entities\": 5}").unwrap_err();
    assert!(matches!(err, DriverError::Json(_)));
}

// ---- Config ----

#[test]
fn test_config_defaults_when_unset() {
    let config = DriverConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, DriverConfig::default());
}

#[test]
fn test_config_reads_variables() {
    let config = DriverConfig::from_lookup(|var| match var {
        TICKS_VAR => Some("25".to_string()),
        ATOMIC_MOVES_VAR => Some("yes".to_string()),
        SCENARIO_VAR => Some("/tmp/fleet.json".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.ticks, 25);
    assert!(config.atomic_fuel_moves);
    assert_eq!(config.scenario_path.to_str(), Some("/tmp/fleet.json"));
}

#[test]
fn test_config_rejects_bad_values() {
    let err = DriverConfig::from_lookup(|var| (var == TICKS_VAR).then(|| "lots".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        DriverError::InvalidConfig { var: TICKS_VAR, .. }
    ));
}
