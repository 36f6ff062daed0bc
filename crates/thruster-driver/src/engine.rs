//! The driver engine.
//!
//! `Driver` owns the hecs world holding every entity's property store,
//! processes queued orders at the tick boundary, and produces
//! `DriverSnapshot`s. Orders run one at a time, in queue order.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use hecs::World;
use tracing::{info, warn};

use thruster_core::entity::Entity;
use thruster_core::types::{EntityId, SimTime};

use crate::config::DriverConfig;
use crate::errors::{DriverError, OrderError};
use crate::orders::Order;
use crate::scenario::Scenario;
use crate::state::{DriverSnapshot, OrderFailure};

pub struct Driver {
    world: World,
    index: HashMap<EntityId, hecs::Entity>,
    time: SimTime,
    config: DriverConfig,
    order_queue: VecDeque<Order>,
    script: Vec<Order>,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            world: World::new(),
            index: HashMap::new(),
            time: SimTime::default(),
            config,
            order_queue: VecDeque::new(),
            script: Vec::new(),
        }
    }

    /// Spawn the scenario's entities and install its script.
    pub fn from_scenario(config: DriverConfig, scenario: Scenario) -> Result<Self, DriverError> {
        for (entity, property) in scenario.unknown_properties() {
            warn!(
                entity = %entity,
                property = %property,
                "scenario sets a property no command uses"
            );
        }

        let mut driver = Self::new(config);
        for entity in scenario.entities {
            driver.spawn(entity)?;
        }
        driver.script = scenario.script;
        Ok(driver)
    }

    pub fn spawn(&mut self, entity: Entity) -> Result<(), DriverError> {
        let id = entity.id;
        if self.index.contains_key(&id) {
            return Err(DriverError::DuplicateEntity(id));
        }
        let handle = self.world.spawn((entity,));
        self.index.insert(id, handle);
        Ok(())
    }

    /// Queue an order for processing at the next tick boundary.
    pub fn queue_order(&mut self, order: Order) {
        self.order_queue.push_back(order);
    }

    pub fn queue_orders(&mut self, orders: impl IntoIterator<Item = Order>) {
        self.order_queue.extend(orders);
    }

    /// Queue the script, execute every queued order, and advance one tick.
    pub fn tick(&mut self) -> DriverSnapshot {
        self.order_queue.extend(self.script.iter().cloned());

        let mut failures = Vec::new();
        while let Some(order) = self.order_queue.pop_front() {
            if let Err(err) = self.execute(&order) {
                warn!(
                    tick = self.time.tick,
                    entity = %order.entity(),
                    code = err.code(),
                    cause = err.cause_code(),
                    error = %err,
                    "order failed"
                );
                failures.push(OrderFailure {
                    order,
                    code: err.code().to_string(),
                    cause: err.cause_code().to_string(),
                    message: err.to_string(),
                });
            }
        }

        self.time.advance();
        info!(tick = self.time.tick, failed = failures.len(), "tick complete");
        self.snapshot(failures)
    }

    /// Run `config.ticks` ticks and return the last snapshot.
    pub fn run(&mut self) -> DriverSnapshot {
        let mut last = self.snapshot(Vec::new());
        for _ in 0..self.config.ticks {
            last = self.tick();
        }
        last
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Copy of an entity's current state.
    pub fn entity(&self, id: EntityId) -> Option<Entity> {
        let handle = *self.index.get(&id)?;
        self.world
            .get::<&Entity>(handle)
            .ok()
            .map(|entity| (*entity).clone())
    }

    fn execute(&mut self, order: &Order) -> Result<(), OrderError> {
        let id = order.entity();
        let handle = *self.index.get(&id).ok_or(OrderError::UnknownEntity(id))?;
        let entity = self
            .world
            .query_one_mut::<&mut Entity>(handle)
            .map_err(|_| OrderError::UnknownEntity(id))?;

        let subject = RefCell::new(entity);
        let mut command = order.build(&subject, self.config.atomic_fuel_moves);
        command.execute()?;
        Ok(())
    }

    fn snapshot(&self, failures: Vec<OrderFailure>) -> DriverSnapshot {
        let mut entities: Vec<Entity> = {
            let mut query = self.world.query::<&Entity>();
            query.iter().map(|(_, entity)| entity.clone()).collect()
        };
        entities.sort_by_key(|entity| entity.id);

        DriverSnapshot {
            time: self.time,
            entities,
            failures,
        }
    }
}
