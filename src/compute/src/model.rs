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

//! The Compute Engine v1 types used to manage network peerings.
//!
//! These types follow the JSON representation of the Compute Engine API. All
//! fields are optional on the wire. Fields set to `None` are omitted when
//! the value is serialized.

use serde::{Deserialize, Serialize};

/// Represents a VPC network.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Network {
    /// Name of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// An optional description of this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// When set to `true`, the network is created in "auto subnet mode".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_subnetworks: Option<bool>,

    /// Maximum Transmission Unit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<i32>,

    /// A list of network peerings for the resource.
    ///
    /// The order is determined by the service.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub peerings: Vec<NetworkPeering>,

    /// Server-defined fully-qualified URLs for all subnetworks in this VPC
    /// network.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnetworks: Vec<String>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Network::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [self_link][Network::self_link].
    pub fn set_self_link<T: Into<String>>(mut self, v: T) -> Self {
        self.self_link = Some(v.into());
        self
    }

    /// Sets the value of [peerings][Network::peerings].
    pub fn set_peerings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NetworkPeering>,
    {
        self.peerings = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A network peering attached to a network resource.
///
/// The `state` and `state_details` fields are output only.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkPeering {
    /// Name of this peering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The URL of the peer network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    /// Whether full mesh connectivity is created and managed automatically
    /// between peered networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_routes: Option<bool>,

    /// Indicates whether full mesh connectivity is created and managed
    /// automatically between peered networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_subnet_routes: Option<bool>,

    /// Whether to export the custom routes to peer network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_custom_routes: Option<bool>,

    /// Whether to import the custom routes from peer network.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_custom_routes: Option<bool>,

    /// State for the peering, either `ACTIVE` or `INACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Details about the current state of the peering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_details: Option<String>,
}

impl NetworkPeering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][NetworkPeering::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [network][NetworkPeering::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    /// Sets the value of [auto_create_routes][NetworkPeering::auto_create_routes].
    pub fn set_auto_create_routes<T: Into<bool>>(mut self, v: T) -> Self {
        self.auto_create_routes = Some(v.into());
        self
    }

    /// Sets the value of [exchange_subnet_routes][NetworkPeering::exchange_subnet_routes].
    pub fn set_exchange_subnet_routes<T: Into<bool>>(mut self, v: T) -> Self {
        self.exchange_subnet_routes = Some(v.into());
        self
    }

    /// Sets the value of [state][NetworkPeering::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [state_details][NetworkPeering::state_details].
    pub fn set_state_details<T: Into<String>>(mut self, v: T) -> Self {
        self.state_details = Some(v.into());
        self
    }
}

/// The body of a `networks.addPeering` request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworksAddPeeringRequest {
    /// Name of the peering, which should conform to RFC1035.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// URL of the peer network. It can be either full URL or partial URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_network: Option<String>,

    /// Whether Compute Engine creates routes to the peer network.
    ///
    /// `Some(false)` is sent on the wire. Only `None` is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_routes: Option<bool>,

    /// The peering details. Newer versions of the API prefer this field over
    /// the top-level `peer_network` and `auto_create_routes` fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_peering: Option<NetworkPeering>,
}

impl NetworksAddPeeringRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][NetworksAddPeeringRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [peer_network][NetworksAddPeeringRequest::peer_network].
    pub fn set_peer_network<T: Into<String>>(mut self, v: T) -> Self {
        self.peer_network = Some(v.into());
        self
    }

    /// Sets the value of [auto_create_routes][NetworksAddPeeringRequest::auto_create_routes].
    pub fn set_auto_create_routes<T: Into<bool>>(mut self, v: T) -> Self {
        self.auto_create_routes = Some(v.into());
        self
    }

    /// Sets or clears the value of [auto_create_routes][NetworksAddPeeringRequest::auto_create_routes].
    pub fn set_or_clear_auto_create_routes<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.auto_create_routes = v.map(|x| x.into());
        self
    }
}

/// The body of a `networks.removePeering` request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworksRemovePeeringRequest {
    /// Name of the peering, which should conform to RFC1035.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NetworksRemovePeeringRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][NetworksRemovePeeringRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Represents an Operation resource.
///
/// Compute Engine returns an operation for every mutation. The mutation is
/// complete when the operation status is [DONE][operation::Status::Done].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// Name of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The type of operation, such as `addPeering` or `removePeering`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,

    /// The status of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<operation::Status>,

    /// An optional textual description of the current status of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,

    /// The URL of the resource that the operation modifies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_link: Option<String>,

    /// An optional progress indicator that ranges from 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,

    /// The time that this operation was requested, in RFC3339 text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_time: Option<String>,

    /// The time that this operation was completed, in RFC3339 text format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// If errors are generated during processing of the operation, this field
    /// is populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<operation::Error>,

    /// If the operation fails, this field contains the HTTP error status code
    /// that was returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error_status_code: Option<i32>,

    /// If the operation fails, this field contains the HTTP error message that
    /// was returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_error_message: Option<String>,

    /// Server-defined URL for the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [operation_type][Operation::operation_type].
    pub fn set_operation_type<T: Into<String>>(mut self, v: T) -> Self {
        self.operation_type = Some(v.into());
        self
    }

    /// Sets the value of [status][Operation::status].
    pub fn set_status<T: Into<operation::Status>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [target_link][Operation::target_link].
    pub fn set_target_link<T: Into<String>>(mut self, v: T) -> Self {
        self.target_link = Some(v.into());
        self
    }

    /// Sets the value of [error][Operation::error].
    pub fn set_error<T: Into<operation::Error>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }

    /// Sets the value of [http_error_status_code][Operation::http_error_status_code].
    pub fn set_http_error_status_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.http_error_status_code = Some(v.into());
        self
    }

    /// Sets the value of [http_error_message][Operation::http_error_message].
    pub fn set_http_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.http_error_message = Some(v.into());
        self
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    use serde::{Deserialize, Serialize};

    /// The status of an operation.
    #[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Status {
        Pending,
        Running,
        Done,
        /// A status value not known to this version of the library.
        #[serde(other)]
        Unknown,
    }

    impl Status {
        /// The name of the status, as it appears on the wire.
        pub fn name(&self) -> &str {
            match self {
                Self::Pending => "PENDING",
                Self::Running => "RUNNING",
                Self::Done => "DONE",
                Self::Unknown => "UNKNOWN",
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    /// The errors generated while processing an operation.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Error {
        /// The array of errors encountered while processing this operation.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        pub errors: Vec<error::Errors>,
    }

    impl Error {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [errors][Error::errors].
        pub fn set_errors<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<error::Errors>,
        {
            self.errors = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    /// Defines additional types related to [Error].
    pub mod error {
        use serde::{Deserialize, Serialize};

        /// A single error encountered while processing an operation.
        #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Errors {
            /// The error type identifier for this error.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub code: Option<String>,

            /// Indicates the field in the request that caused the error.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub location: Option<String>,

            /// An optional, human-readable error message.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub message: Option<String>,
        }

        impl Errors {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [code][Errors::code].
            pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
                self.code = Some(v.into());
                self
            }

            /// Sets the value of [location][Errors::location].
            pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
                self.location = Some(v.into());
                self
            }

            /// Sets the value of [message][Errors::message].
            pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
                self.message = Some(v.into());
                self
            }
        }
    }
}

/// Request messages for the `networks` service.
pub mod networks {
    use super::{NetworksAddPeeringRequest, NetworksRemovePeeringRequest};

    /// The request message for `networks.get`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: String,
        /// Name of the network to return.
        pub network: String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [project][GetRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [network][GetRequest::network].
        pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
            self.network = v.into();
            self
        }
    }

    /// The request message for `networks.addPeering`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct AddPeeringRequest {
        /// Project ID for this request.
        pub project: String,
        /// Name of the network resource to add peering to.
        pub network: String,
        /// The body of the request.
        pub body: Option<NetworksAddPeeringRequest>,
    }

    impl AddPeeringRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [project][AddPeeringRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [network][AddPeeringRequest::network].
        pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
            self.network = v.into();
            self
        }

        /// Sets the value of [body][AddPeeringRequest::body].
        pub fn set_body<T: Into<NetworksAddPeeringRequest>>(mut self, v: T) -> Self {
            self.body = Some(v.into());
            self
        }
    }

    /// The request message for `networks.removePeering`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct RemovePeeringRequest {
        /// Project ID for this request.
        pub project: String,
        /// Name of the network resource to remove peering from.
        pub network: String,
        /// The body of the request.
        pub body: Option<NetworksRemovePeeringRequest>,
    }

    impl RemovePeeringRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [project][RemovePeeringRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [network][RemovePeeringRequest::network].
        pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
            self.network = v.into();
            self
        }

        /// Sets the value of [body][RemovePeeringRequest::body].
        pub fn set_body<T: Into<NetworksRemovePeeringRequest>>(mut self, v: T) -> Self {
            self.body = Some(v.into());
            self
        }
    }
}

/// Request messages for the `globalOperations` service.
pub mod global_operations {
    /// The request message for `globalOperations.get`.
    #[derive(Clone, Debug, Default, PartialEq)]
    #[non_exhaustive]
    pub struct GetRequest {
        /// Project ID for this request.
        pub project: String,
        /// Name of the operations resource to return.
        pub operation: String,
    }

    impl GetRequest {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [project][GetRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.project = v.into();
            self
        }

        /// Sets the value of [operation][GetRequest::operation].
        pub fn set_operation<T: Into<String>>(mut self, v: T) -> Self {
            self.operation = v.into();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn add_peering_sends_explicit_false() -> TestResult {
        let request = NetworksAddPeeringRequest::new()
            .set_name("peer-a")
            .set_peer_network("projects/p/global/networks/net-2")
            .set_auto_create_routes(false);
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "name": "peer-a",
            "peerNetwork": "projects/p/global/networks/net-2",
            "autoCreateRoutes": false,
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn add_peering_omits_unset() -> TestResult {
        let request = NetworksAddPeeringRequest::new()
            .set_name("peer-a")
            .set_or_clear_auto_create_routes(None::<bool>);
        let got = serde_json::to_value(&request)?;
        assert_eq!(got, json!({"name": "peer-a"}));
        Ok(())
    }

    #[test]
    fn network_from_json() -> TestResult {
        let input = json!({
            "kind": "compute#network",
            "id": "123456",
            "name": "net-1",
            "selfLink": "https://www.googleapis.com/compute/v1/projects/p/global/networks/net-1",
            "autoCreateSubnetworks": true,
            "peerings": [
                {
                    "name": "peer-a",
                    "network": "https://www.googleapis.com/compute/v1/projects/p/global/networks/net-2",
                    "autoCreateRoutes": true,
                    "exchangeSubnetRoutes": true,
                    "state": "ACTIVE",
                    "stateDetails": "[2026-01-01T00:00:00.000-00:00]: Connected."
                },
                {
                    "name": "peer-b",
                    "state": "INACTIVE"
                }
            ]
        });
        let got = serde_json::from_value::<Network>(input)?;
        assert_eq!(got.name.as_deref(), Some("net-1"));
        assert_eq!(got.peerings.len(), 2);
        let first = &got.peerings[0];
        assert_eq!(first.name.as_deref(), Some("peer-a"));
        assert_eq!(first.auto_create_routes, Some(true));
        assert_eq!(first.state.as_deref(), Some("ACTIVE"));
        let second = &got.peerings[1];
        assert_eq!(second.auto_create_routes, None);
        assert_eq!(second.state.as_deref(), Some("INACTIVE"));
        Ok(())
    }

    #[test]
    fn operation_from_json() -> TestResult {
        let input = json!({
            "kind": "compute#operation",
            "name": "operation-123",
            "operationType": "addPeering",
            "status": "DONE",
            "progress": 100,
            "error": {"errors": [{"code": "RESOURCE_NOT_FOUND", "message": "gone"}]},
            "httpErrorStatusCode": 404,
            "httpErrorMessage": "NOT FOUND"
        });
        let got = serde_json::from_value::<Operation>(input)?;
        let want = Operation::new()
            .set_name("operation-123")
            .set_operation_type("addPeering")
            .set_status(operation::Status::Done)
            .set_error(operation::Error::new().set_errors([
                operation::error::Errors::new()
                    .set_code("RESOURCE_NOT_FOUND")
                    .set_message("gone"),
            ]))
            .set_http_error_status_code(404)
            .set_http_error_message("NOT FOUND");
        let want = Operation {
            progress: Some(100),
            ..want
        };
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn operation_status_unknown() -> TestResult {
        let got = serde_json::from_value::<operation::Status>(json!("SUSPENDED"))?;
        assert_eq!(got, operation::Status::Unknown);
        let got = serde_json::from_value::<operation::Status>(json!("RUNNING"))?;
        assert_eq!(got.to_string(), "RUNNING");
        Ok(())
    }
}
