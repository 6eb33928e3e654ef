use std::collections::HashMap;
use std::sync::Arc;

use crate::core::error::RegistryError;
use crate::core::tool::ToolDescriptor;

/// Dispatch table keyed by tool name.
#[derive(Clone, Debug)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, ToolDescriptor>>,
}

impl ToolRegistry {
    /// Bind every descriptor. A repeated name is a configuration error.
    pub fn register<I>(catalog: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ToolDescriptor>,
    {
        let mut map = HashMap::new();
        for tool in catalog {
            if map.insert(tool.name, tool).is_some() {
                return Err(RegistryError::DuplicateTool(tool.name));
            }
        }
        Ok(Self { by_name: Arc::new(map) })
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.by_name.get(name)
    }

    /// Descriptors sorted by name.
    pub fn list(&self) -> Vec<&ToolDescriptor> {
        let mut tools: Vec<&ToolDescriptor> = self.by_name.values().collect();
        tools.sort_by_key(|t| t.name);
        tools
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
