//! Dispatcher — routes a slash command to a lock operation.
//!
//! One dispatch is a self-contained read → decide → write sequence: validate
//! the configuration, parse the text, load the claim mapping, decide through
//! a fresh `Mutex`, persist on success, render a response. Contention is an
//! expected outcome and renders as a "Sorry, …" message; only configuration
//! and storage failures surface as errors.

use crate::mutex::Mutex;
use crate::registry::ResourceRegistry;
use crate::store::{ClaimMap, ClaimStore, StoreError};

use super::command::{Command, Subcommand};
use super::error::DispatchError;
use super::request::{SlashRequest, SlashResponse};
use super::secrets::Secrets;

/// Dispatches slash commands against a claim store.
///
/// Generic over `S`, the store type. The dispatcher holds the store; secrets
/// arrive per request.
pub struct Dispatcher<S> {
    store: S,
}

impl<S: ClaimStore> Dispatcher<S> {
    /// Create a dispatcher over the given claim store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the claim store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle one slash-command invocation end to end.
    ///
    /// Precedence, in order: configuration guard, help routing, allow-list
    /// membership, then the resource subcommand against loaded state. The
    /// configuration guard runs before any store access, regardless of
    /// subcommand.
    pub fn dispatch(
        &self,
        request: &SlashRequest,
        secrets: &Secrets,
    ) -> Result<SlashResponse, DispatchError> {
        let registry = ResourceRegistry::from_secret(secrets.resources());
        if registry.is_empty() {
            return Err(DispatchError::Config(
                "Secret 'resources' must be set".to_string(),
            ));
        }

        let command = Command::parse(&request.text);

        // `help`, or any command without a resource, renders the help text —
        // whether or not the subcommand itself was recognized.
        let resource = match (command.subcommand, command.resource.as_deref()) {
            (Subcommand::Help, _) | (_, None) => {
                return Ok(SlashResponse::new(help_text(&request.command)));
            }
            (_, Some(resource)) => resource,
        };

        if !registry.contains(resource) {
            // User-correctable input, not a system fault.
            return Ok(SlashResponse::new(format!(
                "Resource {} doesn't exist",
                resource
            )));
        }

        self.run_resource_subcommand(command.subcommand, resource, request)
    }

    /// Execute a subcommand against one resource's claim state.
    fn run_resource_subcommand(
        &self,
        subcommand: Subcommand,
        resource: &str,
        request: &SlashRequest,
    ) -> Result<SlashResponse, DispatchError> {
        let claimant = request.user_name.as_str();

        // A payload that was never written is an empty mapping.
        let mut claims = self.store.load()?.unwrap_or_default();
        let mut mutex = Mutex::new(claims.get(resource).cloned().flatten());

        let text = match subcommand {
            Subcommand::Show => match mutex.claimant() {
                Some(holder) => format!("{} is claimed by @{}", resource, holder),
                None => format!("{} is unclaimed", resource),
            },
            Subcommand::Lock => match mutex.lock(claimant) {
                Ok(()) => {
                    self.save_resource_claimant(&mut claims, resource, Some(claimant.to_string()))?;
                    format!("You've successfully claimed {}", resource)
                }
                Err(e) => format!("Sorry, {} is claimed by @{}", resource, e.original_claimant()),
            },
            Subcommand::Unlock => match mutex.unlock(claimant) {
                Ok(()) => {
                    self.save_resource_claimant(&mut claims, resource, None)?;
                    format!("You've successfully released {}", resource)
                }
                Err(e) => format!("Sorry, {} is claimed by @{}", resource, e.original_claimant()),
            },
            // Unrecognized subcommand with a resource present.
            Subcommand::Help | Subcommand::Unrecognized => help_text(&request.command),
        };

        Ok(SlashResponse::new(text))
    }

    /// Persist one resource's new claimant: the full prior mapping with one
    /// key overwritten, saved as a whole. Releasing writes an explicit
    /// `None` rather than removing the key.
    fn save_resource_claimant(
        &self,
        claims: &mut ClaimMap,
        resource: &str,
        claimant: Option<String>,
    ) -> Result<(), StoreError> {
        claims.insert(resource.to_string(), claimant);
        self.store.save(claims)
    }
}

/// Render the help text for the configured command name.
fn help_text(slash_command: &str) -> String {
    format!(
        "How to use {cmd}\n\
         \n\
         `{cmd} help`: This message\n\
         `{cmd} show RESOURCE`: Tell who (if anyone) claimed `RESOURCE`\n\
         `{cmd} lock RESOURCE`: Claim `RESOURCE`\n\
         `{cmd} unlock RESOURCE`: Release `RESOURCE`\n",
        cmd = slash_command
    )
}
