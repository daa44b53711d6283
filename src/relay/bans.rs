use std::collections::HashSet;

/// The set of actor identities banned from being reported by the relay.
///
/// Identities are stored lowercased, so membership checks are
/// case-insensitive. The set starts empty on every process start and is
/// mutated only through chat moderation commands.
#[derive(Debug, Default)]
pub struct BanList {
    banned: HashSet<String>,
}

impl BanList {
    pub fn is_banned(&self, identity: &str) -> bool {
        self.banned.contains(&identity.to_lowercase())
    }

    /// Adds an identity to the ban list.
    /// Returns `false` if it was already banned.
    pub fn ban(&mut self, identity: &str) -> bool {
        self.banned.insert(identity.to_lowercase())
    }

    /// Removes an identity from the ban list.
    /// Returns `false` if it was not banned.
    pub fn unban(&mut self, identity: &str) -> bool {
        self.banned.remove(&identity.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ban_is_idempotent() {
        let mut bans = BanList::default();
        assert!(bans.ban("troll"));
        assert!(!bans.ban("troll"));
        assert!(bans.is_banned("troll"));
    }

    #[test]
    fn membership_is_case_insensitive() {
        let mut bans = BanList::default();
        bans.ban("Troll");
        assert!(bans.is_banned("TROLL"));
        assert!(bans.is_banned("troll"));
    }

    #[test]
    fn unban_restores_reporting() {
        let mut bans = BanList::default();
        bans.ban("troll");
        assert!(bans.unban("troll"));
        assert!(!bans.unban("troll"));
        assert!(!bans.is_banned("troll"));
    }
}
