//! Ordered registry of command descriptors.
//!
//! Lookup scans the list in registration order instead of indexing by name,
//! because overload order is registration order and candidate selection is
//! a prefix test on the whole input line, not an exact name match.

use nes_types::color;
use nes_types::error::Result;

use crate::descriptor::{CommandDescriptor, DynamicChoices};

/// Every known command signature, in registration order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    descriptors: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor after every existing one.
    ///
    /// A declaration the coercer cannot serve is refused with
    /// `UnsupportedParameterType`.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<()> {
        if let Err(e) = descriptor.validate() {
            log::error!("Refusing to register {}: {e}", descriptor.usage());
            return Err(e);
        }
        if self.descriptors.iter().any(|d| d.shadows(&descriptor)) {
            log::warn!(
                "{} is shadowed by an earlier overload and will never be selected",
                descriptor.usage()
            );
        }
        log::debug!("Registered command {}", descriptor.usage());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Register several descriptors, stopping at the first invalid one.
    pub fn register_all(
        &mut self,
        descriptors: impl IntoIterator<Item = CommandDescriptor>,
    ) -> Result<()> {
        for d in descriptors {
            self.register(d)?;
        }
        Ok(())
    }

    /// Descriptors whose upper-cased name is a prefix of the trimmed,
    /// upper-cased `line`, in registration order.
    ///
    /// This is a prefix test on the whole line, so a command `he` is a
    /// candidate for `help foo`.
    pub fn find_candidates(&self, line: &str) -> Vec<&CommandDescriptor> {
        let normalized = line.trim().to_uppercase();
        self.descriptors
            .iter()
            .filter(|d| normalized.starts_with(&d.name().to_uppercase()))
            .collect()
    }

    /// All descriptors in registration order.
    pub fn descriptors(&self) -> &[CommandDescriptor] {
        &self.descriptors
    }

    /// Distinct command names in first-registration order.
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for d in &self.descriptors {
            if !names.iter().any(|n| n.eq_ignore_ascii_case(d.name())) {
                names.push(d.name());
            }
        }
        names
    }

    /// Resolve a dynamic choice set to concrete strings.
    pub fn choices(&self, set: DynamicChoices) -> Vec<String> {
        match set {
            DynamicChoices::Commands => self
                .command_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            DynamicChoices::Colors => color::color_names().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
