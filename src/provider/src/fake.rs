// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An in-memory Compute Engine service for controller tests.

use compute::client::Networks;
use compute::model::operation::Status as OperationStatus;
use compute::model::{Network, NetworkPeering, Operation, global_operations, networks};
use gax::Result;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub(crate) const PROJECT: &str = "test-project";

#[derive(Clone, Debug, Default)]
pub(crate) struct FakeNetworks {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub networks: BTreeMap<(String, String), Network>,
    pub get_requests: Vec<networks::GetRequest>,
    pub add_requests: Vec<networks::AddPeeringRequest>,
    pub remove_requests: Vec<networks::RemovePeeringRequest>,
    pub operation_requests: Vec<global_operations::GetRequest>,
    pub get_error: Option<Error>,
    pub add_error: Option<Error>,
    pub remove_error: Option<Error>,
    /// Scripted responses for `get_global_operation`. Once empty, operations
    /// are `DONE`, unless `stuck` is set.
    pub polls: VecDeque<Result<Operation>>,
    pub stuck: bool,
    /// `get_global_operation` never returns.
    pub hang: bool,
    next_operation: u32,
}

impl FakeNetworks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_network(self, name: &str, peerings: Vec<NetworkPeering>) -> Self {
        let network = Network::new().set_name(name).set_peerings(peerings);
        self.state()
            .networks
            .insert((PROJECT.to_string(), name.to_string()), network);
        self
    }

    pub fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("fake state is never poisoned")
    }

    pub fn client(&self) -> Networks {
        Networks::from_stub(self.clone())
    }

    pub fn peerings(&self, network: &str) -> Vec<NetworkPeering> {
        self.state()
            .networks
            .get(&(PROJECT.to_string(), network.to_string()))
            .map(|n| n.peerings.clone())
            .unwrap_or_default()
    }
}

impl State {
    fn network_mut(&mut self, project: &str, network: &str) -> Result<&mut Network> {
        self.networks
            .get_mut(&(project.to_string(), network.to_string()))
            .ok_or_else(|| not_found(project, network))
    }

    fn start(&mut self, operation_type: &str) -> Operation {
        self.next_operation += 1;
        Operation::new()
            .set_name(format!("operation-{}", self.next_operation))
            .set_operation_type(operation_type)
            .set_status(OperationStatus::Running)
    }
}

impl compute::stub::Networks for FakeNetworks {
    async fn get(&self, req: networks::GetRequest) -> Result<Network> {
        let mut state = self.state();
        state.get_requests.push(req.clone());
        if let Some(e) = state.get_error.take() {
            return Err(e);
        }
        state
            .network_mut(&req.project, &req.network)
            .map(|n| n.clone())
    }

    async fn add_peering(&self, req: networks::AddPeeringRequest) -> Result<Operation> {
        let mut state = self.state();
        state.add_requests.push(req.clone());
        if let Some(e) = state.add_error.take() {
            return Err(e);
        }
        let body = req.body.unwrap_or_default();
        let name = body.name.unwrap_or_default();
        let network = state.network_mut(&req.project, &req.network)?;
        if network.peerings.iter().any(|p| p.name.as_deref() == Some(&name)) {
            return Err(Error::service(
                Status::default()
                    .set_code(Code::AlreadyExists)
                    .set_message(format!("peering {name} already exists")),
            ));
        }
        let peering = NetworkPeering::new()
            .set_name(name)
            .set_network(body.peer_network.unwrap_or_default())
            .set_auto_create_routes(body.auto_create_routes.unwrap_or_default())
            .set_state("ACTIVE")
            .set_state_details("[2023-01-01T00:00:00.000-00:00]: Connected.");
        network.peerings.push(peering);
        Ok(state.start("addPeering"))
    }

    async fn remove_peering(&self, req: networks::RemovePeeringRequest) -> Result<Operation> {
        let mut state = self.state();
        state.remove_requests.push(req.clone());
        if let Some(e) = state.remove_error.take() {
            return Err(e);
        }
        let name = req.body.and_then(|b| b.name).unwrap_or_default();
        let network = state.network_mut(&req.project, &req.network)?;
        network.peerings.retain(|p| p.name.as_deref() != Some(&name));
        Ok(state.start("removePeering"))
    }

    async fn get_global_operation(&self, req: global_operations::GetRequest) -> Result<Operation> {
        let hang = {
            let mut state = self.state();
            state.operation_requests.push(req.clone());
            state.hang
        };
        if hang {
            return std::future::pending().await;
        }
        let mut state = self.state();
        if let Some(r) = state.polls.pop_front() {
            return r;
        }
        let status = if state.stuck {
            OperationStatus::Running
        } else {
            OperationStatus::Done
        };
        Ok(Operation::new().set_name(req.operation).set_status(status))
    }
}

pub(crate) fn not_found(project: &str, network: &str) -> Error {
    Error::service(
        Status::default()
            .set_code(Code::NotFound)
            .set_message(format!(
                "The resource 'projects/{project}/global/networks/{network}' was not found"
            )),
    )
}

pub(crate) fn peering(name: &str, peer: &str, auto_create_routes: bool) -> NetworkPeering {
    NetworkPeering::new()
        .set_name(name)
        .set_network(peer)
        .set_auto_create_routes(auto_create_routes)
        .set_state("ACTIVE")
        .set_state_details("Connected.")
}

pub(crate) fn fast_backoff() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_initial_delay(Duration::from_millis(1))
        .with_maximum_delay(Duration::from_millis(2))
        .build()
        .expect("test backoff parameters are valid")
}
