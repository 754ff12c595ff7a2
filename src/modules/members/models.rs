use std::fmt;

/// Sequentially assigned member identifier, kept in its printed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(String);

impl MemberId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for MemberId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered borrower. Immutable once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Member {
    pub fn new(id: MemberId, request: NewMember) -> Self {
        Self {
            id,
            name: request.name,
            address: request.address,
            phone: request.phone,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Address: {}, Phone: {}",
            self.id, self.name, self.address, self.phone
        )
    }
}

/// Request model for registering a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl NewMember {
    pub fn new(name: impl Into<String>, address: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }
}
