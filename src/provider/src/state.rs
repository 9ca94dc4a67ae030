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

use serde::{Deserialize, Serialize};

/// The local state of a VPC network peering connection.
///
/// The host persists this value between operations. The `id` is the local
/// identifier: `Some` while the peering exists remotely, `None` once it is
/// deleted or found missing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PeeringConnection {
    /// The local identifier, equal to `name` after creation or import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The name of the peering.
    pub name: String,

    /// The network that owns the peering, as a name or a self link.
    pub network: String,

    /// The project of `network`. Defaults to the provider project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// The network on the other side of the peering.
    pub peer_network: String,

    /// Whether routes to the peer network are created automatically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_routes: Option<bool>,

    /// The remote state of the peering, e.g. `ACTIVE` or `INACTIVE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Details about `state`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_details: Option<String>,
}

impl PeeringConnection {
    /// Creates the desired state for a new peering.
    pub fn new<N, W, P>(name: N, network: W, peer_network: P) -> Self
    where
        N: Into<String>,
        W: Into<String>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            network: network.into(),
            peer_network: peer_network.into(),
            ..Default::default()
        }
    }

    /// Sets the project.
    pub fn with_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = Some(v.into());
        self
    }

    /// Sets `auto_create_routes`.
    pub fn with_auto_create_routes(mut self, v: bool) -> Self {
        self.auto_create_routes = Some(v);
        self
    }

    /// Returns true if the peering is known to exist remotely.
    pub fn exists(&self) -> bool {
        self.id.is_some()
    }

    /// Clears the attributes reported by the service.
    pub fn clear_computed(&mut self) {
        self.state = None;
        self.state_details = None;
    }

    /// Marks the peering as gone. The configured attributes are kept, so the
    /// same value can be created again.
    pub fn forget(&mut self) {
        self.id = None;
        self.clear_computed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize() -> anyhow::Result<()> {
        let state = PeeringConnection::new("peer-a", "net-1", "net-2").with_auto_create_routes(false);
        let got = serde_json::to_value(&state)?;
        let want = json!({
            "name": "peer-a",
            "network": "net-1",
            "peer_network": "net-2",
            "auto_create_routes": false,
        });
        assert_eq!(got, want);
        assert!(!state.exists());
        Ok(())
    }

    #[test]
    fn forget_keeps_configuration() {
        let desired = PeeringConnection::new("peer-a", "net-1", "net-2")
            .with_project("p")
            .with_auto_create_routes(true);
        let mut state = PeeringConnection {
            id: Some("peer-a".into()),
            state: Some("ACTIVE".into()),
            state_details: Some("Connected.".into()),
            ..desired.clone()
        };
        state.forget();
        assert_eq!(state, desired);
        assert!(!state.exists());
    }

    #[test]
    fn deserialize_partial() -> anyhow::Result<()> {
        let got = serde_json::from_value::<PeeringConnection>(json!({
            "id": "peer-a",
            "name": "peer-a",
        }))?;
        assert!(got.exists());
        assert_eq!(got.network, "");
        assert_eq!(got.auto_create_routes, None);
        Ok(())
    }
}
