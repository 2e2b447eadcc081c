#![allow(dead_code)]

pub mod backend;

use anyhow::anyhow;
use async_trait::async_trait;
use civic::errors::CivicError;
use civic::requests::ApiRequest;
use civic::responses::{ApiResponse, RawOutcome};
use civic::transport::Transport;
use civic::views::Navigator;
use civic::wallet::{Address, ContractCall, Wallet};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

pub const ACCOUNT: &str = "0x00000000000000000000000000000000000000aa";

pub fn common_init() {
    _ = simple_logger::init_with_env();
}

pub fn ok(data: Value) -> RawOutcome {
    RawOutcome::Envelope(ApiResponse::ok(data))
}

pub fn rejected(message: &str) -> RawOutcome {
    RawOutcome::Envelope(ApiResponse::rejected(message))
}

pub fn unreachable_backend() -> RawOutcome {
    RawOutcome::Failed(CivicError::TransportError(anyhow!("connection refused")))
}

pub fn post_json(id: &str, likes: u64, is_liked: bool, is_bookmarked: bool) -> Value {
    json!({
        "_id": id,
        "content": format!("Post {id}"),
        "tags": ["community"],
        "images": [],
        "author": {
            "name": "Jane",
            "account": {"_id": "acc-jane", "username": "jane", "avatar": {"url": "https://cdn.example.com/jane.png"}}
        },
        "likes": likes,
        "isLiked": is_liked,
        "isBookmarked": is_bookmarked,
        "createdAt": "2024-05-01T10:00:00.000Z"
    })
}

pub fn comment_json(content: &str) -> Value {
    json!({
        "_id": format!("c-{content}"),
        "content": content,
        "author": {"name": "Sam", "account": {"_id": "acc-sam", "username": "sam"}}
    })
}

pub fn user_json(id: &str, username: &str) -> Value {
    json!({"_id": id, "username": username, "email": format!("{username}@example.com")})
}

/// Answers requests from per-path queues of prepared outcomes.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<HashMap<String, VecDeque<RawOutcome>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, outcome: RawOutcome) -> &Self {
        self.outcomes
            .lock()
            .unwrap()
            .entry(path.to_owned())
            .or_default()
            .push_back(outcome);
        self
    }

    /// Every request seen so far as `METHOD path`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> RawOutcome {
        self.requests.lock().unwrap().push(format!("{} {}", request.method, request.path));
        self.outcomes
            .lock()
            .unwrap()
            .get_mut(&request.path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| RawOutcome::Failed(
                CivicError::TransportError(anyhow!("No scripted response for {}", request.path))
            ))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(String, bool)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<(String, bool)> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str, replace: bool) {
        self.visits.lock().unwrap().push((path.to_owned(), replace));
    }
}

pub struct ScriptedWallet {
    accounts: Option<Vec<Address>>,
    accept_calls: bool,
    calls: Mutex<Vec<ContractCall>>,
}

impl ScriptedWallet {
    pub fn with_account() -> Self {
        ScriptedWallet {
            accounts: Some(vec![Address::parse(ACCOUNT).unwrap()]),
            accept_calls: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn denying_access() -> Self {
        ScriptedWallet {
            accounts: None,
            accept_calls: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting_calls(mut self) -> Self {
        self.accept_calls = false;
        self
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Wallet for ScriptedWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, CivicError> {
        self.accounts
            .clone()
            .ok_or_else(|| CivicError::WalletError(anyhow!("User rejected the request")))
    }

    async fn contract_call(&self, call: ContractCall) -> Result<Value, CivicError> {
        self.calls.lock().unwrap().push(call);
        if self.accept_calls {
            Ok(json!({"transactionHash": "0xabc"}))
        }
        else {
            Err(CivicError::WalletError(anyhow!("execution reverted")))
        }
    }
}

#[macro_export]
macro_rules! assert_err {
    ($expression:expr, $($pattern:tt)+) => {
        match $expression {
            $($pattern)+ => (),
            ref e => panic!("expected `{}` but got `{:?}`", stringify!($($pattern)+), e),
        }
    }
}
