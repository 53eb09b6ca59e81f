#![allow(dead_code)]

use skiff::driver::{Dialect, Driver, Session};
use skiff::stmt::Value;
use skiff::{Db, Error, Result};

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

/// One statement received by a [`Recording`] session.
#[derive(Debug, Clone, PartialEq)]
pub struct Exec {
    pub sql: String,
    pub params: Vec<Value>,
}

#[derive(Debug, Default)]
struct State {
    log: Vec<Exec>,

    /// Row counts returned by the next executions. `1` when empty.
    responses: VecDeque<Result<u64>>,
}

/// A driver whose sessions record every statement instead of executing it.
#[derive(Clone)]
pub struct Recording {
    dialect: Dialect,
    state: Arc<Mutex<State>>,
}

impl Recording {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            state: Arc::default(),
        }
    }

    pub fn sql_server() -> Self {
        Self::new(Dialect::SqlServer)
    }

    pub async fn db(&self) -> Db {
        Db::builder().build(self.clone()).await.unwrap()
    }

    /// Queue the result of the next execution.
    pub fn respond(&self, response: Result<u64>) {
        self.state.lock().unwrap().responses.push_back(response);
    }

    pub fn log(&self) -> Vec<Exec> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn pop(&self) -> Exec {
        self.state
            .lock()
            .unwrap()
            .log
            .pop()
            .expect("no statement was executed")
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().unwrap().log.is_empty()
    }
}

impl fmt::Debug for Recording {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recording")
            .field("dialect", &self.dialect)
            .finish()
    }
}

#[skiff::async_trait]
impl Driver for Recording {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn connect(&self) -> Result<Box<dyn Session>> {
        Ok(Box::new(self.clone()))
    }
}

#[skiff::async_trait]
impl Session for Recording {
    async fn exec_non_query(&mut self, sql: &str, params: &[Value]) -> Result<u64> {
        let mut state = self.state.lock().unwrap();

        state.log.push(Exec {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        state.responses.pop_front().unwrap_or(Ok(1))
    }
}

/// An error raised by a database, standing in for a transport failure.
#[derive(Debug)]
pub struct ConnectionReset;

impl fmt::Display for ConnectionReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection reset by peer")
    }
}

impl std::error::Error for ConnectionReset {}

pub fn connection_reset() -> Error {
    Error::driver(ConnectionReset)
}
