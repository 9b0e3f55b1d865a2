// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Entry point for talking to the proxy service

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{paths, HttpTransport, Transport};
use crate::session::Session;

/// Handle on one proxy service.
///
/// Owns the configuration and transport; sessions created from it share the
/// transport. Building another client never affects existing sessions.
#[derive(Clone)]
pub struct RemoteClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl RemoteClient {
    /// Build a client and check the service answers its health ping
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let client = Self::new(config)?;
        if !client.ping().await {
            return Err(Error::ServiceUnavailable(
                client.config.endpoint.to_string(),
            ));
        }
        info!(endpoint = %client.config.endpoint, "Connected to service");
        Ok(client)
    }

    /// Build a client without contacting the service
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build a client over any transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Health check, true when the service replies `{"status":"ok"}`
    pub async fn ping(&self) -> bool {
        let reply = match self.transport.call(paths::PING, None, Bytes::new()).await {
            Ok(reply) => reply,
            Err(e) => {
                debug!(error = %e, "Ping failed");
                return false;
            }
        };

        serde_json::from_str::<HashMap<String, serde_json::Value>>(&reply)
            .map(|body| body.get("status").and_then(|s| s.as_str()) == Some("ok"))
            .unwrap_or(false)
    }

    /// Create a new remote session
    pub async fn new_session(&self) -> Result<Session> {
        Session::create(self.transport.clone()).await
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
