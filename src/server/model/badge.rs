//! User badge decoding.
//!
//! Discord encodes badge eligibility in the user's `public_flags` bitfield. Only the
//! badges listed in [`BADGES`] are displayed; any other bit is ignored.

use bitflags::bitflags;

bitflags! {
    /// Public user flags that map to a displayed badge.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PublicFlags: u64 {
        const STAFF                        = 1 << 0;
        const PARTNER                      = 1 << 1;
        const HYPESQUAD                    = 1 << 2;
        const BUG_HUNTER_LEVEL_1           = 1 << 3;
        const HYPESQUAD_BRAVERY            = 1 << 6;
        const HYPESQUAD_BRILLIANCE         = 1 << 7;
        const HYPESQUAD_BALANCE            = 1 << 8;
        const EARLY_SUPPORTER              = 1 << 9;
        const TEAM_USER                    = 1 << 10;
        const BUG_HUNTER_LEVEL_2           = 1 << 14;
        const VERIFIED_BOT                 = 1 << 16;
        const EARLY_VERIFIED_BOT_DEVELOPER = 1 << 17;
        const CERTIFIED_MODERATOR          = 1 << 18;
    }
}

/// Badge labels in ascending bit order. Output order of [`decode_badges`] follows this table.
pub const BADGES: [(PublicFlags, &str); 13] = [
    (PublicFlags::STAFF, "Discord Employee"),
    (PublicFlags::PARTNER, "Partnered Server Owner"),
    (PublicFlags::HYPESQUAD, "HypeSquad Events"),
    (PublicFlags::BUG_HUNTER_LEVEL_1, "Bug Hunter Level 1"),
    (PublicFlags::HYPESQUAD_BRAVERY, "HypeSquad Bravery"),
    (PublicFlags::HYPESQUAD_BRILLIANCE, "HypeSquad Brilliance"),
    (PublicFlags::HYPESQUAD_BALANCE, "HypeSquad Balance"),
    (PublicFlags::EARLY_SUPPORTER, "Early Supporter"),
    (PublicFlags::TEAM_USER, "Team User"),
    (PublicFlags::BUG_HUNTER_LEVEL_2, "Bug Hunter Level 2"),
    (PublicFlags::VERIFIED_BOT, "Verified Bot"),
    (
        PublicFlags::EARLY_VERIFIED_BOT_DEVELOPER,
        "Early Verified Bot Developer",
    ),
    (PublicFlags::CERTIFIED_MODERATOR, "Discord Certified Moderator"),
];

/// Decodes a `public_flags` bitfield into badge labels.
///
/// Each known bit is tested independently; unknown bits are dropped.
///
/// # Arguments
/// - `flags` - Raw bitfield from the user object
///
/// # Returns
/// - `Vec<&'static str>` - Labels of the set badges, in ascending bit order
pub fn decode_badges(flags: u64) -> Vec<&'static str> {
    let flags = PublicFlags::from_bits_truncate(flags);

    BADGES
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, label)| *label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_decode_to_no_badges() {
        assert!(decode_badges(0).is_empty());
    }

    /// Bits 4, 5, 11, 12, 13, 15 and 19+ carry no badge.
    #[test]
    fn unknown_bits_are_ignored() {
        let unknown = (1 << 4) | (1 << 5) | (1 << 11) | (1 << 12) | (1 << 13) | (1 << 15) | (1 << 22);
        assert!(decode_badges(unknown).is_empty());
    }

    #[test]
    fn single_bit_decodes_to_its_label() {
        assert_eq!(decode_badges(1 << 0), vec!["Discord Employee"]);
        assert_eq!(decode_badges(1 << 14), vec!["Bug Hunter Level 2"]);
        assert_eq!(decode_badges(1 << 18), vec!["Discord Certified Moderator"]);
    }

    #[test]
    fn labels_follow_bit_order() {
        let flags = (1 << 17) | (1 << 7) | (1 << 1);
        assert_eq!(
            decode_badges(flags),
            vec![
                "Partnered Server Owner",
                "HypeSquad Brilliance",
                "Early Verified Bot Developer"
            ]
        );
    }

    #[test]
    fn all_known_bits_decode_every_badge() {
        let badges = decode_badges(PublicFlags::all().bits());
        let expected: Vec<&str> = BADGES.iter().map(|(_, label)| *label).collect();
        assert_eq!(badges, expected);
    }

    /// Setting one more known bit adds exactly its label without disturbing the others.
    #[test]
    fn decoding_is_monotonic_per_bit() {
        let base = (1 << 2) | (1 << 9) | (1 << 16);
        let before = decode_badges(base);

        for (flag, label) in BADGES {
            if base & flag.bits() != 0 {
                continue;
            }

            let after = decode_badges(base | flag.bits());
            assert_eq!(after.len(), before.len() + 1);
            assert!(after.contains(&label));

            let without_new: Vec<&str> = after.into_iter().filter(|l| *l != label).collect();
            assert_eq!(without_new, before);
        }
    }

    #[test]
    fn unknown_bits_do_not_hide_known_badges() {
        let flags = (1 << 6) | (1 << 12) | (1 << 40);
        assert_eq!(decode_badges(flags), vec!["HypeSquad Bravery"]);
    }
}
