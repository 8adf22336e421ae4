// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cal_cmd::CalCommand;
use super::echo::EchoCommand;
use super::ls::LsCommand;
use super::tac_cmd::TacCommand;

/// Register the commands available in every session
pub fn register_defaults(registry: &mut CommandRegistry) {
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(TacCommand));
    registry.register(Box::new(CalCommand::default()));
}

/// Create a registry holding the default commands
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_defaults(&mut registry);
    registry
}
