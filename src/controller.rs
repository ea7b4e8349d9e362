//! Controller Module
//!
//! The turn control loop: poll the world, detect the controlled player's
//! turn, let the strategy act, end the turn.
//!
//! ## States
//! ```text
//!            predicate false
//!          ┌────────────────┐
//!          ▼                │
//!   ┌─────────────┐  poll   │        ┌─────────────┐
//!   │   Waiting   │─────────┴───────▶│   Acting    │
//!   └─────────────┘  predicate true  └──────┬──────┘
//!          ▲                                │ orders, delay, END
//!          └────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! - Transport and decode errors while polling end the loop with an error
//! - Rejected orders and a rejected END are logged and collected in the
//!   `TurnReport`; the batch and the END call always go ahead

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TrySendError};

use crate::config::{Color, Config};
use crate::error::Result;
use crate::network::{Client, Transport};
use crate::protocol::Status;
use crate::strategy::Strategy;
use crate::world::{Holdings, WorldSnapshot};

/// A server-side rejection of one order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Encoded command that was rejected
    pub command: String,

    /// Server text, verbatim
    pub reason: String,
}

/// What happened during one Acting phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub orders_sent: usize,
    pub rejections: Vec<Rejection>,
    pub end_turn: Status,
}

/// Stops a running `TurnController::run` at its next wait
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: Sender<()>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        match self.tx.try_send(()) {
            Ok(()) => {}
            // A request is already pending
            Err(TrySendError::Full(())) => {}
            // The controller is gone, nothing left to stop
            Err(TrySendError::Disconnected(())) => {}
        }
    }
}

/// Drives one player's turns over a shared client
pub struct TurnController<T: Transport, S: Strategy> {
    client: Arc<Client<T>>,
    strategy: S,
    player: String,
    poll_interval: Duration,
    action_delay: Duration,

    /// Kept so the channel never disconnects while the controller lives
    shutdown_tx: Sender<()>,
    shutdown_rx: Receiver<()>,
}

impl<T: Transport, S: Strategy> TurnController<T, S> {
    /// Create a controller for `config.player_name` with the configured pacing
    pub fn new(client: Arc<Client<T>>, strategy: S, config: &Config) -> Self {
        let (shutdown_tx, shutdown_rx) = channel::bounded(1);
        Self {
            client,
            strategy,
            player: config.player_name.clone(),
            poll_interval: config.poll_interval(),
            action_delay: config.action_delay(),
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn client(&self) -> &Arc<Client<T>> {
        &self.client
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: self.shutdown_tx.clone(),
        }
    }

    /// Register the controlled player; a rejection is an error here
    pub fn register(&self, color: Color) -> Result<()> {
        let status = self.client.add_player(&self.player, color)?;
        status.into_result("PLAYER")?;
        tracing::info!("Registered player {:?}", self.player);
        Ok(())
    }

    /// Fetch and decode the current world
    pub fn poll(&self) -> Result<WorldSnapshot> {
        self.client.world()
    }

    /// One Waiting-state poll, acting if it is our turn
    pub fn step(&mut self) -> Result<Option<TurnReport>> {
        let world = self.poll()?;

        if !world.is_turn_of(&self.player) {
            tracing::trace!(
                freeze = world.freeze,
                players = world.player_queue.len(),
                active = world.active_player().map(|p| p.name.as_str()).unwrap_or(""),
                "not our turn"
            );
            return Ok(None);
        }

        self.play_turn(&world).map(Some)
    }

    /// Acting state: run the strategy, dispatch its orders, end the turn
    pub fn play_turn(&mut self, world: &WorldSnapshot) -> Result<TurnReport> {
        let holdings = Holdings::of(world, &self.player);
        tracing::info!(
            round = world.round,
            countries = holdings.mine.len(),
            reinforcement = holdings.reinforcement,
            strategy = self.strategy.name(),
            "Turn started"
        );

        let orders = self.strategy.decide(world, &holdings);
        let mut rejections = Vec::new();

        for order in &orders {
            let command = order.to_command();
            if let Status::Rejected(reason) = Status::parse(&self.client.send(&command)?) {
                let command = command.encode();
                tracing::warn!("{} rejected: {}", command, reason);
                rejections.push(Rejection { command, reason });
            }
        }

        thread::sleep(self.action_delay);

        let end_turn = self.client.end_turn()?;
        if let Status::Rejected(reason) = &end_turn {
            tracing::warn!("END rejected: {}", reason);
        }

        tracing::info!(
            orders = orders.len(),
            rejected = rejections.len(),
            "Turn ended"
        );

        Ok(TurnReport {
            orders_sent: orders.len(),
            rejections,
            end_turn,
        })
    }

    /// Poll forever, until an error or a shutdown request
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(
            "Polling every {:?} as {:?}",
            self.poll_interval,
            self.player
        );

        loop {
            if self.wait(self.poll_interval) {
                tracing::info!("Shutdown requested, leaving control loop");
                return Ok(());
            }
            self.step()?;
        }
    }

    /// Sleep for `duration`; true if shutdown was requested meanwhile
    fn wait(&self, duration: Duration) -> bool {
        match self.shutdown_rx.recv_timeout(duration) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => true,
        }
    }
}
