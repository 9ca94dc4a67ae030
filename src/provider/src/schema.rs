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

//! Describes the attributes of a resource to the host.
//!
//! The host uses the schema to validate configurations and to plan changes.
//! Attributes marked `force_new` cannot be updated in place, a change
//! requires replacing the resource.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// The type of an attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttributeType {
    String,
    Bool,
}

impl AttributeType {
    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Bool => value.is_boolean(),
        }
    }
}

/// A single attribute of a resource.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub force_new: bool,
    pub description: &'static str,
}

impl Attribute {
    fn new(name: &'static str, kind: AttributeType) -> Self {
        Self {
            name,
            kind,
            required: false,
            optional: false,
            computed: false,
            force_new: false,
            description: "",
        }
    }

    /// A string attribute the configuration must set.
    pub fn required_string(name: &'static str) -> Self {
        Self::new(name, AttributeType::String).required()
    }

    /// A string attribute the configuration may set.
    pub fn optional_string(name: &'static str) -> Self {
        Self::new(name, AttributeType::String).optional()
    }

    /// A boolean attribute the configuration may set.
    pub fn optional_bool(name: &'static str) -> Self {
        Self::new(name, AttributeType::Bool).optional()
    }

    /// A string attribute only the provider sets.
    pub fn computed_string(name: &'static str) -> Self {
        Self::new(name, AttributeType::String).computed()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self.required = false;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn with_description(mut self, v: &'static str) -> Self {
        self.description = v;
        self
    }

    /// Returns true if only the provider may set this attribute.
    pub fn is_read_only(&self) -> bool {
        self.computed && !self.required && !self.optional
    }
}

/// How the host imports existing resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Importer {
    /// The import identifier becomes the local identifier, unchanged.
    Passthrough,
}

/// The attributes of a resource, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub version: u32,
    attributes: Vec<Attribute>,
    importer: Option<Importer>,
}

impl Schema {
    /// An empty schema at version zero.
    pub fn v0() -> Self {
        Self {
            version: 0,
            attributes: Vec::new(),
            importer: None,
        }
    }

    pub fn with_attribute(mut self, v: Attribute) -> Self {
        self.attributes.push(v);
        self
    }

    pub fn with_importer(mut self, v: Importer) -> Self {
        self.importer = Some(v);
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn importer(&self) -> Option<Importer> {
        self.importer
    }

    /// Returns true if changing `name` requires replacing the resource.
    pub fn requires_replace(&self, name: &str) -> bool {
        self.attribute(name).is_some_and(|a| a.force_new)
    }

    /// Validates a desired configuration.
    ///
    /// Required attributes must be set and non-empty, read-only attributes
    /// must be unset, and all values must have the declared type. Fields of
    /// `value` not in the schema, such as the local identifier, are ignored.
    pub fn validate<T: Serialize>(&self, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| Error::Validation(format!("cannot inspect configuration: {e}")))?;
        for attribute in &self.attributes {
            let field = value.get(attribute.name).filter(|v| !is_unset(v));
            match field {
                None if attribute.required => return Err(Error::required(attribute.name)),
                None => {}
                Some(_) if attribute.is_read_only() => {
                    return Err(Error::Validation(format!(
                        "{:?}: computed attribute cannot be set",
                        attribute.name
                    )));
                }
                Some(v) if !attribute.kind.matches(v) => {
                    return Err(Error::Validation(format!(
                        "{:?}: expected a {:?} value, got {v}",
                        attribute.name, attribute.kind
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

fn is_unset(v: &Value) -> bool {
    v.is_null() || v.as_str().is_some_and(str::is_empty)
}
