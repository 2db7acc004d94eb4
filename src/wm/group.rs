//! Group - a named set of interfaces refreshed together

use crate::registry::Model;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    name: String,
    /// Member names in the order they joined
    members: Vec<String>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member; adding one twice keeps the first position.
    pub fn add(&mut self, member: impl Into<String>) {
        let member = member.into();
        if !self.contains(&member) {
            self.members.push(member);
        }
    }

    pub fn remove(&mut self, member: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != member);
        self.members.len() != before
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Model for Group {
    const KIND: &'static str = "group";

    fn name(&self) -> &str {
        &self.name
    }
}
