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

//! Manages VPC network peering connections.
//!
//! A peering connection is an entry in the `peerings` list of a network. It is
//! created with the `addPeering` method and deleted with `removePeering`, both
//! return a global operation. There is no method to update a peering: all the
//! configurable attributes force a new resource.

use crate::config::{ProviderConfig, Timeouts};
use crate::error::{Error, Result};
use crate::not_found::{self, Lookup};
use crate::operation_wait::OperationWaiter;
use crate::resolve;
use crate::resource::Resource;
use crate::schema::{Attribute, Importer, Schema};
use crate::state::PeeringConnection;
use compute::client::Networks;
use compute::credentials::{access_token, anonymous};
use compute::model::{NetworksAddPeeringRequest, NetworksRemovePeeringRequest};

/// The resource type name.
pub const TYPE_NAME: &str = "google_compute_vpc_peering_connection";

/// The controller for `google_compute_vpc_peering_connection`.
///
/// # Example
/// ```no_run
/// # use peering_provider::{PeeringConnection, VpcPeeringConnection};
/// # use peering_provider::config::ProviderConfig;
/// # async fn sample() -> peering_provider::Result<()> {
/// let config = ProviderConfig::new().with_project("my-project").from_env();
/// let controller = VpcPeeringConnection::from_config(&config).await?;
/// let mut state = PeeringConnection::new("peer-a", "net-1", "projects/other/global/networks/net-2")
///     .with_auto_create_routes(true);
/// controller.create(&mut state).await?;
/// println!("peering is {:?}", state.state);
/// controller.delete(&mut state).await?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct VpcPeeringConnection {
    client: Networks,
    waiter: OperationWaiter,
    project: Option<String>,
    timeouts: Timeouts,
}

impl VpcPeeringConnection {
    /// Creates a controller using an existing client.
    pub fn new(client: Networks, config: &ProviderConfig) -> Result<Self> {
        config.validate()?;
        let waiter = OperationWaiter::new(client.clone(), config.polling.backoff()?);
        Ok(Self {
            client,
            waiter,
            project: config.project.clone(),
            timeouts: config.timeouts.clone(),
        })
    }

    /// Creates a controller and its Compute Engine client.
    pub async fn from_config(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;
        let mut builder = Networks::builder();
        if let Some(endpoint) = &config.compute_endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.with_user_agent(user_agent);
        }
        if config.anonymous {
            builder = builder.with_credentials(anonymous::Builder::new().build());
        } else if let Some(token) = &config.access_token {
            let credentials = access_token::Builder::new(token)
                .build()
                .map_err(compute::builder::Error::cred)?;
            builder = builder.with_credentials(credentials);
        }
        let client = builder.build().await?;
        Self::new(client, config)
    }

    /// The attributes of a peering connection.
    pub fn schema() -> Schema {
        Schema::v0()
            .with_attribute(
                Attribute::required_string("name")
                    .force_new()
                    .with_description("The name of the peering."),
            )
            .with_attribute(
                Attribute::required_string("network")
                    .force_new()
                    .with_description("The network owning the peering, as a name or self link."),
            )
            .with_attribute(Attribute::optional_string("project").force_new())
            .with_attribute(
                Attribute::required_string("peer_network")
                    .force_new()
                    .with_description("The network on the other side of the peering."),
            )
            .with_attribute(Attribute::optional_bool("auto_create_routes").force_new())
            .with_attribute(Attribute::computed_string("state"))
            .with_attribute(Attribute::computed_string("state_details"))
            .with_importer(Importer::Passthrough)
    }

    /// Creates the peering and waits until the operation completes.
    ///
    /// The local identifier is set as soon as the service accepts the
    /// request. If waiting fails the identifier remains set, the peering may
    /// exist.
    #[tracing::instrument(skip_all, fields(name = %state.name, network = %state.network))]
    pub async fn create(&self, state: &mut PeeringConnection) -> Result<()> {
        // Values left by a previous read are never sent.
        state.clear_computed();
        Self::schema().validate(state)?;
        let project = self.project(state)?;
        let network = resolve::network_name(&state.network)?;

        let body = NetworksAddPeeringRequest::new()
            .set_name(&state.name)
            .set_peer_network(&state.peer_network)
            .set_auto_create_routes(state.auto_create_routes.unwrap_or_default());
        tracing::debug!(
            project = %project,
            network = %network,
            peer_network = %state.peer_network,
            auto_create_routes = ?body.auto_create_routes,
            "adding network peering"
        );
        let operation = self
            .client
            .add_peering()
            .set_project(&project)
            .set_network(&network)
            .set_body(body)
            .send()
            .await
            .map_err(|source| Error::Operation {
                context: "creating network peering".to_string(),
                source,
            })?;

        state.id = Some(state.name.clone());
        self.waiter
            .wait(
                operation,
                &project,
                "Creating Network Peering",
                self.timeouts.create,
            )
            .await?;
        tracing::info!(project = %project, network = %network, "created network peering");

        self.read(state).await
    }

    /// Refreshes the peering from its network.
    ///
    /// If the network, or the peering within the network, no longer exists
    /// the local identifier is cleared and no error is returned.
    #[tracing::instrument(skip_all, fields(name = %state.name, network = %state.network))]
    pub async fn read(&self, state: &mut PeeringConnection) -> Result<()> {
        let Some(id) = state.id.clone() else {
            tracing::debug!("no local identifier, nothing to read");
            return Ok(());
        };
        let project = self.project(state)?;
        let network = resolve::network_name(&state.network)?;

        tracing::debug!(project = %project, network = %network, "getting network");
        let result = self
            .client
            .get()
            .set_project(&project)
            .set_network(&network)
            .send()
            .await;
        let found = not_found::classify(result).map_err(|source| Error::Api {
            context: format!("Network {network:?}"),
            source,
        })?;
        let Lookup::Found(remote) = found else {
            not_found::remove_from_state(
                state,
                TYPE_NAME,
                &format!("Network {network:?}"),
            );
            return Ok(());
        };

        let peering = remote
            .peerings
            .into_iter()
            .find(|p| p.name.as_deref() == Some(id.as_str()));
        let Lookup::Found(peering) = Lookup::from(peering) else {
            not_found::remove_from_state(
                state,
                TYPE_NAME,
                &format!("Network peering {id:?} not found in network {network:?}"),
            );
            return Ok(());
        };

        state.name = peering.name.unwrap_or(id);
        state.auto_create_routes = Some(peering.auto_create_routes.unwrap_or_default());
        state.state = peering.state;
        state.state_details = peering.state_details;
        Ok(())
    }

    /// Removes the peering and waits until the operation completes.
    ///
    /// The local identifier is cleared only if the operation succeeds.
    #[tracing::instrument(skip_all, fields(name = %state.name, network = %state.network))]
    pub async fn delete(&self, state: &mut PeeringConnection) -> Result<()> {
        let id = state.id.clone().ok_or_else(|| Error::required("id"))?;
        let project = self.project(state)?;
        let network = resolve::network_name(&state.network)?;

        tracing::debug!(
            project = %project,
            network = %network,
            peering = %id,
            "removing network peering"
        );
        let operation = self
            .client
            .remove_peering()
            .set_project(&project)
            .set_network(&network)
            .set_body(NetworksRemovePeeringRequest::new().set_name(&id))
            .send()
            .await
            .map_err(|source| Error::Operation {
                context: "deleting network peering".to_string(),
                source,
            })?;
        self.waiter
            .wait(
                operation,
                &project,
                "Deleting Network Peering",
                self.timeouts.delete,
            )
            .await?;

        tracing::info!(project = %project, network = %network, "deleted network peering");
        state.forget();
        Ok(())
    }

    /// Returns the local state for an existing peering.
    ///
    /// The identifier is used verbatim. The caller must set the network and
    /// then [read][Self::read] the peering.
    pub fn import(id: &str) -> PeeringConnection {
        PeeringConnection {
            id: Some(id.to_string()),
            name: id.to_string(),
            ..Default::default()
        }
    }

    fn project(&self, state: &PeeringConnection) -> Result<String> {
        resolve::project(state.project.as_deref(), self.project.as_deref())
    }
}

#[async_trait::async_trait]
impl Resource for VpcPeeringConnection {
    type State = PeeringConnection;

    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn schema(&self) -> Schema {
        Self::schema()
    }

    async fn create(&self, state: &mut PeeringConnection) -> Result<()> {
        VpcPeeringConnection::create(self, state).await
    }

    async fn read(&self, state: &mut PeeringConnection) -> Result<()> {
        VpcPeeringConnection::read(self, state).await
    }

    async fn delete(&self, state: &mut PeeringConnection) -> Result<()> {
        VpcPeeringConnection::delete(self, state).await
    }

    fn import(&self, id: &str) -> Result<PeeringConnection> {
        Ok(Self::import(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PollingConfig;
    use crate::fake::{self, FakeNetworks, PROJECT};
    use gax::error::rpc::{Code, Status};
    use std::time::Duration;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn config() -> ProviderConfig {
        ProviderConfig::new()
            .with_project(PROJECT)
            .with_polling(PollingConfig {
                initial_delay: Duration::from_millis(1),
                maximum_delay: Duration::from_millis(2),
                scaling: 2.0,
            })
    }

    fn controller(fake: &FakeNetworks) -> anyhow::Result<VpcPeeringConnection> {
        Ok(VpcPeeringConnection::new(fake.client(), &config())?)
    }

    fn existing(name: &str, network: &str) -> PeeringConnection {
        let mut state = PeeringConnection::new(name, network, "net-2");
        state.id = Some(name.to_string());
        state
    }

    #[test_case(Some(true))]
    #[test_case(Some(false))]
    #[test_case(None)]
    #[tokio::test]
    async fn create_then_read(auto_create_routes: Option<bool>) -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        state.auto_create_routes = auto_create_routes;
        controller.create(&mut state).await?;
        controller.read(&mut state).await?;

        assert_eq!(state.id.as_deref(), Some("peer-a"));
        assert_eq!(state.name, "peer-a");
        assert_eq!(state.network, "net-1");
        assert_eq!(
            state.auto_create_routes,
            Some(auto_create_routes.unwrap_or_default())
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_scenario() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = controller(&fake)?;
        let mut state =
            PeeringConnection::new("peer-a", "net-1", "net-2").with_auto_create_routes(true);
        controller.create(&mut state).await?;

        let requests = fake.state().add_requests.clone();
        assert_eq!(requests.len(), 1, "{requests:?}");
        let request = &requests[0];
        assert_eq!(request.project, PROJECT);
        assert_eq!(request.network, "net-1");
        let body = request.body.clone().unwrap_or_default();
        assert_eq!(body.name.as_deref(), Some("peer-a"));
        assert_eq!(body.peer_network.as_deref(), Some("net-2"));
        assert_eq!(body.auto_create_routes, Some(true));
        assert!(!fake.state().operation_requests.is_empty());

        assert_eq!(state.state.as_deref(), Some("ACTIVE"));
        assert!(state.state_details.is_some(), "{state:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_sends_explicit_false() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        controller.create(&mut state).await?;

        let body = fake.state().add_requests[0].body.clone().unwrap_or_default();
        assert_eq!(body.auto_create_routes, Some(false));
        let json = serde_json::to_value(&body)?;
        assert_eq!(json["autoCreateRoutes"], serde_json::json!(false));
        Ok(())
    }

    #[tokio::test]
    async fn create_resolves_self_link_and_project() -> TestResult {
        let fake = FakeNetworks::new();
        fake.state().networks.insert(
            ("other-project".to_string(), "net-1".to_string()),
            compute::model::Network::new().set_name("net-1"),
        );
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new(
            "peer-a",
            "https://www.googleapis.com/compute/v1/projects/other-project/global/networks/net-1",
            "net-2",
        )
        .with_project("other-project");
        controller.create(&mut state).await?;

        let add = fake.state().add_requests[0].clone();
        assert_eq!(add.project, "other-project");
        assert_eq!(add.network, "net-1");
        let get = fake.state().get_requests[0].clone();
        assert_eq!(get.project, "other-project");
        assert_eq!(get.network, "net-1");
        assert!(state.network.starts_with("https://"), "{state:?}");
        Ok(())
    }

    #[test_case(PeeringConnection::new("peer-a", "", "net-2"), "network"; "network")]
    #[test_case(PeeringConnection::new("", "net-1", "net-2"), "name"; "name")]
    #[test_case(PeeringConnection::new("peer-a", "net-1", ""), "peer_network"; "peer network")]
    #[tokio::test]
    async fn create_validation(mut state: PeeringConnection, field: &str) -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = controller(&fake)?;
        let got = controller.create(&mut state).await;
        let err = got.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        assert!(err.is_validation(), "{err:?}");
        assert_eq!(
            err.to_string(),
            format!("{field:?}: required field is not set")
        );
        assert!(fake.state().add_requests.is_empty());
        assert!(state.id.is_none(), "{state:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_without_project() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = VpcPeeringConnection::new(fake.client(), &ProviderConfig::new())?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        let got = controller.create(&mut state).await;
        assert!(matches!(got, Err(ref e) if e.is_validation()), "{got:?}");
        assert!(fake.state().add_requests.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn create_rejected() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        fake.state().add_error = Some(gax::error::Error::service(
            Status::default()
                .set_code(Code::InvalidArgument)
                .set_message("peer network does not exist"),
        ));
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        let got = controller.create(&mut state).await;
        let err = got.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        assert!(matches!(err, Error::Operation { .. }), "{err:?}");
        let msg = err.to_string();
        assert!(msg.starts_with("Error creating network peering: "), "{msg}");
        assert!(msg.contains("peer network does not exist"), "{msg}");
        assert!(state.id.is_none(), "{state:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_wait_fails_keeps_id() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        fake.state().polls.push_back(Err(gax::error::Error::service(
            Status::default().set_code(Code::Internal),
        )));
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        let got = controller.create(&mut state).await;
        assert!(matches!(got, Err(ref e) if e.is_wait()), "{got:?}");
        assert_eq!(state.id.as_deref(), Some("peer-a"));
        assert!(fake.state().get_requests.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn read_found() -> TestResult {
        let fake = FakeNetworks::new().with_network(
            "net-1",
            vec![
                fake::peering("other", "net-3", false),
                fake::peering("peer-a", "net-2", true),
                fake::peering("peer-a", "net-4", false),
            ],
        );
        let controller = controller(&fake)?;
        let mut state = existing("peer-a", "net-1");
        controller.read(&mut state).await?;
        assert_eq!(state.id.as_deref(), Some("peer-a"));
        assert_eq!(state.auto_create_routes, Some(true));
        assert_eq!(state.state.as_deref(), Some("ACTIVE"));
        assert_eq!(state.state_details.as_deref(), Some("Connected."));
        assert_eq!(state.network, "net-1");
        assert_eq!(state.peer_network, "net-2");
        Ok(())
    }

    #[tokio::test]
    async fn read_peering_missing() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = controller(&fake)?;
        let mut state = existing("peer-a", "net-1");
        controller.read(&mut state).await?;
        assert!(state.id.is_none(), "{state:?}");
        Ok(())
    }

    #[tokio::test]
    async fn read_network_missing() -> TestResult {
        let fake = FakeNetworks::new();
        let controller = controller(&fake)?;
        let mut state = existing("peer-a", "net-1");
        controller.read(&mut state).await?;
        assert!(state.id.is_none(), "{state:?}");
        Ok(())
    }

    #[tokio::test]
    async fn read_error() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        fake.state().get_error = Some(gax::error::Error::service(
            Status::default()
                .set_code(Code::PermissionDenied)
                .set_message("denied"),
        ));
        let controller = controller(&fake)?;
        let mut state = existing("peer-a", "net-1");
        let got = controller.read(&mut state).await;
        let err = got.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        assert!(matches!(err, Error::Api { .. }), "{err:?}");
        assert!(err.to_string().starts_with(r#"Error reading Network "net-1""#), "{err}");
        assert_eq!(state.id.as_deref(), Some("peer-a"));
        Ok(())
    }

    #[tokio::test]
    async fn read_without_id() -> TestResult {
        let fake = FakeNetworks::new();
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        controller.read(&mut state).await?;
        assert!(fake.state().get_requests.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_read() -> TestResult {
        let fake = FakeNetworks::new()
            .with_network("net-1", vec![fake::peering("peer-a", "net-2", true)]);
        let controller = controller(&fake)?;
        let mut state = existing("peer-a", "net-1");
        controller.delete(&mut state).await?;
        assert!(state.id.is_none(), "{state:?}");

        let remove = fake.state().remove_requests[0].clone();
        assert_eq!(remove.project, PROJECT);
        assert_eq!(remove.network, "net-1");
        assert_eq!(remove.body.and_then(|b| b.name).as_deref(), Some("peer-a"));
        assert!(fake.peerings("net-1").is_empty());

        controller.read(&mut state).await?;
        assert!(state.id.is_none(), "{state:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_delete_read_create() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        controller.create(&mut state).await?;
        assert_eq!(state.state.as_deref(), Some("ACTIVE"));

        controller.delete(&mut state).await?;
        controller.read(&mut state).await?;
        assert!(!state.exists(), "{state:?}");
        assert!(state.state.is_none(), "{state:?}");
        assert!(state.state_details.is_none(), "{state:?}");

        controller.create(&mut state).await?;
        assert_eq!(state.id.as_deref(), Some("peer-a"));
        assert_eq!(state.state.as_deref(), Some("ACTIVE"));
        assert_eq!(fake.state().add_requests.len(), 2);
        assert_eq!(fake.peerings("net-1").len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn recreate_after_removed_outside() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        controller.create(&mut state).await?;

        if let Some(network) = fake
            .state()
            .networks
            .get_mut(&(PROJECT.to_string(), "net-1".to_string()))
        {
            network.peerings.clear();
        }
        controller.read(&mut state).await?;
        assert!(!state.exists(), "{state:?}");
        assert!(state.state.is_none(), "{state:?}");

        controller.create(&mut state).await?;
        assert!(state.exists(), "{state:?}");
        assert_eq!(state.state.as_deref(), Some("ACTIVE"));
        Ok(())
    }

    #[tokio::test]
    async fn create_ignores_stale_computed_attributes() -> TestResult {
        let fake = FakeNetworks::new().with_network("net-1", vec![]);
        let controller = controller(&fake)?;
        let mut state = PeeringConnection {
            state: Some("INACTIVE".into()),
            state_details: Some("stale".into()),
            ..PeeringConnection::new("peer-a", "net-1", "net-2")
        };
        controller.create(&mut state).await?;
        assert_eq!(state.state.as_deref(), Some("ACTIVE"));
        assert_ne!(state.state_details.as_deref(), Some("stale"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_rejected_keeps_id() -> TestResult {
        let fake = FakeNetworks::new()
            .with_network("net-1", vec![fake::peering("peer-a", "net-2", true)]);
        fake.state().remove_error = Some(gax::error::Error::service(
            Status::default()
                .set_code(Code::FailedPrecondition)
                .set_message("peering is busy"),
        ));
        let controller = controller(&fake)?;
        let mut state = existing("peer-a", "net-1");
        let got = controller.delete(&mut state).await;
        let err = got.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;
        assert!(
            err.to_string().starts_with("Error deleting network peering: "),
            "{err}"
        );
        assert_eq!(state.id.as_deref(), Some("peer-a"));
        assert!(fake.state().operation_requests.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delete_timeout_keeps_id() -> TestResult {
        let fake = FakeNetworks::new()
            .with_network("net-1", vec![fake::peering("peer-a", "net-2", true)]);
        fake.state().stuck = true;
        let config = config().with_timeouts(Timeouts {
            delete: Duration::from_millis(5),
            ..Timeouts::default()
        });
        let controller = VpcPeeringConnection::new(fake.client(), &config)?;
        let mut state = existing("peer-a", "net-1");
        let got = controller.delete(&mut state).await;
        assert!(matches!(got, Err(ref e) if e.is_timeout()), "{got:?}");
        assert_eq!(state.id.as_deref(), Some("peer-a"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_without_id() -> TestResult {
        let fake = FakeNetworks::new();
        let controller = controller(&fake)?;
        let mut state = PeeringConnection::new("peer-a", "net-1", "net-2");
        let got = controller.delete(&mut state).await;
        assert!(matches!(got, Err(ref e) if e.is_validation()), "{got:?}");
        assert!(fake.state().remove_requests.is_empty());
        Ok(())
    }

    #[test_case("peer-a", true; "exists")]
    #[test_case("peer-b", false; "missing")]
    #[tokio::test]
    async fn import_then_read(id: &str, exists: bool) -> TestResult {
        let fake = FakeNetworks::new()
            .with_network("net-1", vec![fake::peering("peer-a", "net-2", true)]);
        let controller = controller(&fake)?;
        let mut state = Resource::import(&controller, id)?;
        assert_eq!(state.id.as_deref(), Some(id));
        state.network = "net-1".to_string();
        Resource::read(&controller, &mut state).await?;
        if exists {
            assert_eq!(state.id.as_deref(), Some(id));
            assert_eq!(state.name, id);
            assert_eq!(state.auto_create_routes, Some(true));
            assert_eq!(state.state.as_deref(), Some("ACTIVE"));
        } else {
            assert!(state.id.is_none(), "{state:?}");
            assert!(state.state.is_none(), "{state:?}");
        }
        Ok(())
    }

    #[test]
    fn schema() {
        let schema = VpcPeeringConnection::schema();
        let names: Vec<_> = schema.attributes().iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            [
                "name",
                "network",
                "project",
                "peer_network",
                "auto_create_routes",
                "state",
                "state_details"
            ]
        );
        for name in ["name", "network", "project", "peer_network", "auto_create_routes"] {
            assert!(schema.requires_replace(name), "{name}");
        }
        for name in ["state", "state_details"] {
            assert!(
                schema.attribute(name).is_some_and(Attribute::is_read_only),
                "{name}"
            );
        }
        assert_eq!(schema.importer(), Some(Importer::Passthrough));
    }

    #[test]
    fn invalid_config() {
        let fake = FakeNetworks::new();
        let config = config().with_timeouts(Timeouts {
            create: Duration::ZERO,
            ..Timeouts::default()
        });
        let got = VpcPeeringConnection::new(fake.client(), &config);
        assert!(matches!(got, Err(Error::Config(_))), "{got:?}");
    }
}
