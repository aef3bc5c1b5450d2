// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-operation tool implementations, grouped the way the plugins ship
//! them.

pub mod account;
pub mod evm;
pub mod query;
pub mod schedule;
pub mod token;
pub mod topic;

/// Define a tool struct: context-tailored description at construction,
/// schema from the raw parameter type, and an `execute` that funnels
/// every failure through the façade's uniform error shape.
macro_rules! define_tool {
    (
        $(#[$meta:meta])*
        $tool:ident {
            method: $method:expr,
            name: $name:expr,
            operation: $operation:expr,
            params: $params:ty,
            description: $description:path,
            run: $run:path $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $tool {
            description: String,
        }

        impl $tool {
            /// Build the tool, tailoring its description to the context.
            pub fn new(context: &hak_core::Context) -> Self {
                Self {
                    description: $description(context),
                }
            }
        }

        #[async_trait::async_trait]
        impl crate::tool::HederaTool for $tool {
            fn method(&self) -> &str {
                $method
            }

            fn name(&self) -> &str {
                $name
            }

            fn description(&self) -> &str {
                &self.description
            }

            fn parameters(&self) -> schemars::Schema {
                schemars::schema_for!($params)
            }

            async fn execute(
                &self,
                client: &hak_core::HederaClient,
                context: &hak_core::Context,
                params: &serde_json::Value,
            ) -> hak_core::ToolResponse {
                match $run(client, context, params).await {
                    Ok(response) => response,
                    Err(err) => crate::tool::fail($operation, &err),
                }
            }
        }
    };
}

pub(crate) use define_tool;
