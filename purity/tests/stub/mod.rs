#![allow(dead_code)]

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use async_trait::async_trait;

use purity::contract_api::{
    errors::Error,
    events::{EventCallback, EventLog, SubscriptionHandle},
    Address, BlockNumber, ContractClient, Token,
};

use serde_json::{json, Value};

pub const REGISTRY: &str = "0x1111111111111111111111111111111111111111";
pub const CHANNEL: &str = "0x2222222222222222222222222222222222222222";
pub const USER: &str = "0x3333333333333333333333333333333333333333";
pub const CREATOR: &str = "0x4444444444444444444444444444444444444444";

pub fn addr(hex: &str) -> Address {
    hex.parse().unwrap()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Clone, Copy, Debug)]
pub enum Failure {
    NoRecord,
    Transport,
}

struct Listener {
    event: String,
    from_block: BlockNumber,
    callback: EventCallback,
}

#[derive(Default)]
struct Inner {
    /// Responses matching method and arguments exactly.
    exact: Vec<(String, Vec<Token>, Value)>,

    /// Responses matching any arguments.
    any: Vec<(String, Value)>,

    failures: Vec<(String, Failure)>,

    reads: Vec<(Address, String, Vec<Token>)>,

    listeners: BTreeMap<u64, Listener>,
    next_handle: u64,
    unsubscribed: Vec<SubscriptionHandle>,
}

/// Contract client answering from canned responses.
#[derive(Clone, Default)]
pub struct StubContract {
    inner: Rc<RefCell<Inner>>,
}

impl StubContract {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &str, value: Value) {
        self.inner
            .borrow_mut()
            .any
            .push((method.to_owned(), value));
    }

    pub fn respond_to(&self, method: &str, args: Vec<Token>, value: Value) {
        self.inner
            .borrow_mut()
            .exact
            .push((method.to_owned(), args, value));
    }

    pub fn fail(&self, method: &str, failure: Failure) {
        self.inner
            .borrow_mut()
            .failures
            .push((method.to_owned(), failure));
    }

    /// Number of reads of a method so far.
    pub fn reads_of(&self, method: &str) -> usize {
        self.inner
            .borrow()
            .reads
            .iter()
            .filter(|(_, name, _)| name == method)
            .count()
    }

    /// Arguments of every read of a method, in call order.
    pub fn read_args(&self, method: &str) -> Vec<Vec<Token>> {
        self.inner
            .borrow()
            .reads
            .iter()
            .filter(|(_, name, _)| name == method)
            .map(|(_, _, args)| args.clone())
            .collect()
    }

    pub fn live_listeners(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn listener_start(&self, handle: SubscriptionHandle) -> Option<BlockNumber> {
        self.inner
            .borrow()
            .listeners
            .get(&handle.0)
            .map(|listener| listener.from_block)
    }

    pub fn unsubscribed(&self) -> Vec<SubscriptionHandle> {
        self.inner.borrow().unsubscribed.clone()
    }

    /// Deliver an event to every listener of it.
    pub fn emit(&self, event: &str, block_number: u64) {
        let mut inner = self.inner.borrow_mut();

        for listener in inner.listeners.values_mut() {
            if listener.event != event {
                continue;
            }

            let log = EventLog {
                event: event.to_owned(),
                block_number: Some(block_number),
                transaction_hash: None,
                data: Value::Null,
            };

            (listener.callback)(Ok(log));
        }
    }

    /// Deliver a transport failure to every listener of an event.
    pub fn emit_error(&self, event: &str) {
        let mut inner = self.inner.borrow_mut();

        for listener in inner.listeners.values_mut() {
            if listener.event == event {
                (listener.callback)(Err(Error::transport("connection reset")));
            }
        }
    }
}

#[async_trait(?Send)]
impl ContractClient for StubContract {
    async fn read(&self, contract: Address, method: &str, args: &[Token]) -> Result<Value, Error> {
        let mut inner = self.inner.borrow_mut();

        inner
            .reads
            .push((contract, method.to_owned(), args.to_vec()));

        if let Some((_, failure)) = inner.failures.iter().find(|(name, _)| name == method) {
            return match failure {
                Failure::NoRecord => Err(Error::NoRecord),
                Failure::Transport => Err(Error::transport(format!("{} failed", method))),
            };
        }

        let exact = inner
            .exact
            .iter()
            .find(|(name, expected, _)| name == method && expected.as_slice() == args)
            .map(|(_, _, value)| value.clone());

        if let Some(value) = exact {
            return Ok(value);
        }

        inner
            .any
            .iter()
            .find(|(name, _)| name == method)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| Error::transport(format!("no response for {}", method)))
    }

    fn build_payload(&self, contract: Address, method: &str, args: &[Token]) -> Result<String, Error> {
        Ok(format!(
            "{}:{}:{}",
            contract,
            method,
            serde_json::to_string(args)?
        ))
    }

    async fn estimate_cost(&self, _: Address, _: &str, _: &[Token]) -> Result<u64, Error> {
        Ok(21_000)
    }

    async fn subscribe(
        &self,
        _: Address,
        event: &str,
        from_block: BlockNumber,
        callback: EventCallback,
    ) -> Result<SubscriptionHandle, Error> {
        let mut inner = self.inner.borrow_mut();

        let id = inner.next_handle;
        inner.next_handle += 1;

        inner.listeners.insert(
            id,
            Listener {
                event: event.to_owned(),
                from_block,
                callback,
            },
        );

        Ok(SubscriptionHandle(id))
    }

    fn unsubscribe(&self, handle: SubscriptionHandle) {
        let mut inner = self.inner.borrow_mut();

        if inner.listeners.remove(&handle.0).is_some() {
            inner.unsubscribed.push(handle);
        }
    }

    fn last_block_number(&self) -> BlockNumber {
        BlockNumber::Number(1_000)
    }

    fn sender(&self) -> Address {
        addr(USER)
    }
}

/// `getCategories` output for these (name, channel count, id) triples.
pub fn categories(records: &[(&str, u64, u64)]) -> Value {
    let names: Vec<String> = records
        .iter()
        .map(|(name, _, _)| format!("0x{}", hex::encode(name)))
        .collect();
    let counts: Vec<String> = records.iter().map(|(_, count, _)| count.to_string()).collect();
    let ids: Vec<String> = records.iter().map(|(_, _, id)| id.to_string()).collect();

    json!({ "0": names, "1": counts, "2": ids })
}

/// `subscriberContents` output; the file address encodes the storage index.
pub fn content(index: u64) -> Value {
    json!({
        "protocol": "1",
        "contentType": "0",
        "fileAddress": format!("ipfs://content-{}", index),
        "summary": format!("Upload #{}", index),
        "uploadTime": (1_600_000_000 + index).to_string(),
    })
}

pub fn uint(value: u64) -> Value {
    Value::String(value.to_string())
}

pub fn channel_data() -> Value {
    json!({
        "contentCreator_": CREATOR,
        "channelName_": format!("0x{}{}", hex::encode("Lofi Beats"), "00".repeat(22)),
        "channelId_": "7",
        "balance_": "2500000000000000000",
        "price_": "100000000000000000",
        "subscriptionCount_": "12",
        "userSubTime_": "0",
        "description_": "Beats to study to",
    })
}
