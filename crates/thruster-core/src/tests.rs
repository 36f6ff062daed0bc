//! Tests for property values, the in-memory entity store, and error classification.

use proptest::prelude::*;

use crate::constants::*;
use crate::entity::Entity;
use crate::errors::{CommandError, ErrorKind, PropertyError};
use crate::property::{PropertyStore, PropertyValue, Restorable};
use crate::types::{EntityId, SimTime, Vector};

fn ship() -> Entity {
    Entity::new(EntityId(7))
        .with(POSITION, Vector::new(12.0, 5.0))
        .with(DIRECTION, 3_i64)
        .with(FUEL_IN_TANK, 15.0)
}

// ---- Property values ----

#[test]
fn test_property_value_json_shapes() {
    let values: Vec<PropertyValue> = serde_json::from_str("[3, 3.5, [1.0, 2.0]]").unwrap();
    assert_eq!(values[0], PropertyValue::Integer(3));
    assert_eq!(values[1], PropertyValue::Number(3.5));
    assert_eq!(values[2], PropertyValue::Vector(Vector::new(1.0, 2.0)));
}

#[test]
fn test_integer_widens_to_number() {
    assert_eq!(PropertyValue::Integer(4).as_number(), Some(4.0));
    assert_eq!(PropertyValue::Number(4.0).as_integer(), None);
    assert_eq!(PropertyValue::Vector(Vector::ZERO).as_number(), None);
}

// ---- Entity store ----

#[test]
fn test_entity_get_and_set() {
    let mut entity = ship();
    assert_eq!(entity.get_vector(POSITION).unwrap(), Vector::new(12.0, 5.0));

    entity
        .set_property(POSITION, Vector::new(5.0, 8.0).into())
        .unwrap();
    assert_eq!(entity.get_vector(POSITION).unwrap(), Vector::new(5.0, 8.0));
}

#[test]
fn test_missing_property_reports_entity_and_name() {
    let entity = ship();
    let err = entity.get_property(VELOCITY).unwrap_err();
    assert_eq!(
        err,
        PropertyError::NotFound {
            entity: EntityId(7),
            property: VELOCITY.to_string(),
        }
    );
    assert_eq!(err.to_string(), "entity #7: property `velocity` not found");
}

#[test]
fn test_wrong_type_read() {
    let entity = ship();
    let err = entity.get_integer(POSITION).unwrap_err();
    assert!(matches!(
        err,
        PropertyError::WrongType {
            expected: "integer",
            found: "vector",
            ..
        }
    ));
    assert_eq!(err.property(), POSITION);
}

#[test]
fn test_locked_property_rejects_writes() {
    let mut entity = ship().lock(POSITION);
    let err = entity
        .set_property(POSITION, Vector::ZERO.into())
        .unwrap_err();
    assert!(matches!(err, PropertyError::ReadOnly { .. }));
    assert_eq!(entity.get_vector(POSITION).unwrap(), Vector::new(12.0, 5.0));
}

#[test]
fn test_mut_ref_is_a_store() {
    fn turn_to<S: PropertyStore>(mut store: S, direction: i64) {
        assert!(store.has_property(FUEL_IN_TANK));
        store.set_property(DIRECTION, direction.into()).unwrap();
    }

    let mut entity = ship();
    turn_to(&mut entity, 4);
    assert_eq!(entity.get_integer(DIRECTION).unwrap(), 4);
}

#[test]
fn test_snapshot_restore() {
    let mut entity = ship();
    let snapshot = entity.snapshot();

    entity.insert(DIRECTION, 0_i64);
    entity.remove(FUEL_IN_TANK);
    entity.restore(snapshot);

    assert_eq!(entity, ship());
}

#[test]
fn test_entity_json_round_trip_keeps_locks() {
    let entity = ship().lock(FUEL_IN_TANK);
    let json = serde_json::to_string(&entity).unwrap();
    let back: Entity = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entity);
}

// ---- Errors ----

#[test]
fn test_error_kinds() {
    let property: CommandError = PropertyError::NotFound {
        entity: EntityId(1),
        property: POSITION.to_string(),
    }
    .into();
    assert_eq!(property.kind(), ErrorKind::PropertyAccess);
    assert!(!property.is_command_exception());

    let fuel = CommandError::NotEnoughFuelForMove {
        entity: EntityId(1),
        fuel_in_tank: 14.0,
        fuel_needed: 15.0,
    };
    assert_eq!(fuel.kind().code(), "ERR_NOT_ENOUGH_FUEL");
    assert!(fuel.is_command_exception());
}

#[test]
fn test_macro_failure_keeps_cause() {
    let inner = CommandError::InvalidCapabilityUse {
        entity: EntityId(2),
        capability: "VelocityDirectionChangeable",
        reason: "entity is not movable".to_string(),
    };
    let outer = inner
        .clone()
        .in_macro("RotateWithVelocityDirection", 1, "ChangeVelocityDirection")
        .in_macro("Patrol", 0, "RotateWithVelocityDirection");

    assert_eq!(outer.kind(), ErrorKind::CommandFailed);
    assert_eq!(outer.root_cause(), &inner);
    assert_eq!(
        outer.to_string(),
        "Patrol failed at step 0 (RotateWithVelocityDirection)"
    );
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    time.advance();
    time.advance();
    assert_eq!(time.tick, 2);
}

proptest! {
    #[test]
    fn prop_integer_properties_round_trip(name in "[a-z_]{1,12}", value in any::<i64>()) {
        let mut entity = Entity::new(EntityId(1));
        entity.set_property(&name, value.into()).unwrap();
        prop_assert_eq!(entity.get_integer(&name).unwrap(), value);
        prop_assert_eq!(entity.get_number(&name).unwrap(), value as f64);
    }
}
