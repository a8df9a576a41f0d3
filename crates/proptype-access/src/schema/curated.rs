//! Hand-maintained object-valued property names.
//!
//! The upstream modifier source does not declare these, and their raw values
//! are bare names that look like any other string.

/// Properties holding a monster name.
pub const MONSTER_PROPERTIES: &[&str] = &[
    "beGregariousMonster",
    "cameraMonster",
    "chateauMonster",
    "crappyCameraMonster",
    "envyfishMonster",
    "iceSculptureMonster",
    "lastCopyableMonster",
    "longConMonster",
    "makeFriendsMonster",
    "motifMonster",
    "nosyNoseMonster",
    "olfactedMonster",
    "photocopyMonster",
    "rainDohMonster",
    "romanticTarget",
    "screencappedMonster",
    "spookyPuttyMonster",
    "stenchCursedMonster",
    "superficiallyInterestedMonster",
    "waxMonster",
    "yearbookCameraTarget",
    "_gallapagosMonster",
    "_latteMonster",
];

/// Properties holding a location name.
pub const LOCATION_PROPERTIES: &[&str] = &[
    "doctorBagQuestLocation",
    "ghostLocation",
    "guzzlrQuestLocation",
    "lastAdventure",
    "nextAdventure",
    "rwbLocation",
];
