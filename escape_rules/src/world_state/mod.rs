//! World graph - the static, read-only map of rooms and the items they hold.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::path::Path;

use crate::entities::{Direction, ItemId, Room, RoomId};
use crate::error::WorldError;

/// Number of distinct items the player must hold before entering the terminal room.
pub const REQUIRED_ITEMS: usize = 6;

const STANDARD_WORLD: &str = include_str!("../../data/world.toml");

/// On-disk layout of a world file.
#[derive(Debug, Deserialize)]
struct WorldFile {
    start_room: String,
    terminal_room: String,
    rooms: Vec<RoomEntry>,
}

#[derive(Debug, Deserialize)]
struct RoomEntry {
    name: String,
    #[serde(default)]
    exits: BTreeMap<String, String>,
    item: Option<String>,
}

/// The complete, validated map of the facility.
///
/// Built once at startup and never mutated; sessions borrow it read-only.
#[derive(Debug, Clone)]
pub struct WorldGraph {
    rooms: HashMap<RoomId, Room>,
    start: RoomId,
    terminal: RoomId,
}

impl WorldGraph {
    /// The built-in Rogue AI facility.
    pub fn standard() -> Result<Self, WorldError> {
        Self::from_toml_str(STANDARD_WORLD)
    }

    /// Parse and validate a world from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, WorldError> {
        let file: WorldFile = toml::from_str(source)?;

        let mut rooms = Vec::with_capacity(file.rooms.len());
        for entry in file.rooms {
            let mut room = Room::new(entry.name.as_str());
            for (direction, destination) in entry.exits {
                let direction: Direction =
                    direction
                        .parse()
                        .map_err(|direction| WorldError::UnknownDirection {
                            room: room.id.clone(),
                            direction,
                        })?;
                room = room.with_exit(direction, destination.as_str());
            }
            if let Some(item) = entry.item {
                room = room.with_item(item.as_str());
            }
            rooms.push(room);
        }

        Self::new(
            rooms,
            RoomId::new(file.start_room),
            RoomId::new(file.terminal_room),
        )
    }

    /// Read, parse and validate a world file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Build a world from rooms and validate it.
    pub fn new(rooms: Vec<Room>, start: RoomId, terminal: RoomId) -> Result<Self, WorldError> {
        let mut by_id = HashMap::with_capacity(rooms.len());
        for room in rooms {
            if by_id.contains_key(&room.id) {
                return Err(WorldError::DuplicateRoom { room: room.id });
            }
            by_id.insert(room.id.clone(), room);
        }

        let world = Self {
            rooms: by_id,
            start,
            terminal,
        };
        world.validate()?;

        tracing::debug!(
            rooms = world.rooms.len(),
            start = %world.start,
            terminal = %world.terminal,
            "World graph loaded"
        );
        Ok(world)
    }

    fn validate(&self) -> Result<(), WorldError> {
        self.room(&self.start)?;
        let terminal = self.room(&self.terminal)?;

        if self.start == self.terminal {
            return Err(WorldError::StartIsTerminal {
                room: self.start.clone(),
            });
        }
        if terminal.item.is_some() {
            return Err(WorldError::TerminalHoldsItem {
                room: terminal.id.clone(),
            });
        }

        let mut items = HashSet::new();
        for room in self.rooms.values() {
            for (direction, destination) in room.exits() {
                if !self.rooms.contains_key(destination) {
                    return Err(WorldError::DanglingExit {
                        room: room.id.clone(),
                        direction,
                        destination: destination.clone(),
                    });
                }
            }
            if let Some(item) = &room.item {
                if !items.insert(item) {
                    return Err(WorldError::DuplicateItem { item: item.clone() });
                }
            }
        }

        if items.len() != REQUIRED_ITEMS {
            return Err(WorldError::ItemCountMismatch {
                expected: REQUIRED_ITEMS,
                found: items.len(),
            });
        }

        let reachable = self.reachable_from(&self.start);
        let mut unreachable: Vec<&RoomId> = self
            .rooms
            .keys()
            .filter(|id| !reachable.contains(id))
            .collect();
        unreachable.sort();
        if let Some(room) = unreachable.first() {
            return Err(WorldError::Unreachable {
                room: (*room).clone(),
            });
        }
        Ok(())
    }

    /// Rooms reachable from `start` by following exits, `start` included.
    fn reachable_from<'a>(&'a self, start: &'a RoomId) -> HashSet<&'a RoomId> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(id) = queue.pop_front() {
            let Some(room) = self.rooms.get(id) else {
                continue;
            };
            for (_, next) in room.exits() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// Look up a room by ID.
    pub fn room(&self, id: &RoomId) -> Result<&Room, WorldError> {
        self.rooms
            .get(id)
            .ok_or_else(|| WorldError::UnknownRoom(id.clone()))
    }

    /// Exits of a room in North, South, East, West order.
    pub fn exits(&self, id: &RoomId) -> Result<Vec<(Direction, &RoomId)>, WorldError> {
        Ok(self.room(id)?.exits().collect())
    }

    /// The item present in a room, if any.
    pub fn item_in(&self, id: &RoomId) -> Result<Option<&ItemId>, WorldError> {
        Ok(self.room(id)?.item.as_ref())
    }

    pub fn start_room(&self) -> &RoomId {
        &self.start
    }

    pub fn terminal_room(&self) -> &RoomId {
        &self.terminal
    }

    /// Whether any room declares this item.
    pub fn contains_item(&self, item: &ItemId) -> bool {
        self.rooms.values().any(|room| room.offers(item))
    }

    /// All rooms, in no particular order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> WorldGraph {
        WorldGraph::standard().unwrap()
    }

    #[test]
    fn test_standard_world_loads() {
        let world = standard();
        assert_eq!(world.room_count(), 8);
        assert_eq!(world.start_room().as_str(), "Dorm Room");
        assert_eq!(world.terminal_room().as_str(), "Mainframe Core");
    }

    #[test]
    fn test_every_exit_resolves() {
        let world = standard();
        for room in world.rooms() {
            for (_, destination) in room.exits() {
                assert!(world.room(destination).is_ok(), "{} -> {}", room.id, destination);
            }
        }
    }

    #[test]
    fn test_one_item_per_non_terminal_room() {
        let world = standard();
        let holders: Vec<_> = world.rooms().filter(|r| r.item.is_some()).collect();
        assert_eq!(holders.len(), REQUIRED_ITEMS);

        assert!(world.item_in(world.start_room()).unwrap().is_none());
        assert!(world.item_in(world.terminal_room()).unwrap().is_none());
    }

    #[test]
    fn test_room_lookup() {
        let world = standard();
        let hallway = RoomId::new("Hallway");

        assert_eq!(
            world.item_in(&hallway).unwrap(),
            Some(&ItemId::new("Quantum Keycard"))
        );
        let exits = world.exits(&hallway).unwrap();
        assert_eq!(
            exits,
            vec![
                (Direction::East, &RoomId::new("Computer Lab")),
                (Direction::West, &RoomId::new("Dorm Room")),
            ]
        );
    }

    #[test]
    fn test_unknown_room_lookup_fails() {
        let world = standard();
        let err = world.room(&RoomId::new("Basement")).unwrap_err();
        assert!(matches!(err, WorldError::UnknownRoom(id) if id.as_str() == "Basement"));
    }

    #[test]
    fn test_contains_item() {
        let world = standard();
        assert!(world.contains_item(&ItemId::new("Live-Boot USB")));
        assert!(!world.contains_item(&ItemId::new("Coffee Mug")));
    }

    fn tiny_world(extra: &str) -> String {
        let mut source = String::from(
            r#"
            start_room = "A"
            terminal_room = "Z"
            "#,
        );
        // A corridor B..G; B is entered from A, each room leads East to the next.
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        for i in 1..names.len() {
            let name = names[i];
            let west = names[i - 1];
            let east = match names.get(i + 1) {
                Some(next) => format!(", East = \"{next}\""),
                None => String::new(),
            };
            source.push_str(&format!(
                "[[rooms]]\nname = \"{name}\"\nexits = {{ West = \"{west}\"{east} }}\nitem = \"item{i}\"\n"
            ));
        }
        source.push_str(extra);
        source
    }

    #[test]
    fn test_custom_world_parses() {
        let source = tiny_world(
            r#"
            [[rooms]]
            name = "A"
            exits = { East = "B", South = "Z" }

            [[rooms]]
            name = "Z"
            exits = { North = "A" }
            "#,
        );
        let world = WorldGraph::from_toml_str(&source).unwrap();
        assert_eq!(world.room_count(), 8);
    }

    #[test]
    fn test_dangling_exit_is_rejected() {
        let source = tiny_world(
            r#"
            [[rooms]]
            name = "A"
            exits = { East = "Nowhere" }

            [[rooms]]
            name = "Z"
            "#,
        );
        let err = WorldGraph::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, WorldError::DanglingExit { destination, .. } if destination.as_str() == "Nowhere"));
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        let source = tiny_world(
            r#"
            [[rooms]]
            name = "A"
            exits = { Up = "Z" }

            [[rooms]]
            name = "Z"
            "#,
        );
        let err = WorldGraph::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, WorldError::UnknownDirection { direction, .. } if direction == "Up"));
    }

    #[test]
    fn test_terminal_item_is_rejected() {
        let source = tiny_world(
            r#"
            [[rooms]]
            name = "A"

            [[rooms]]
            name = "Z"
            item = "Trophy"
            "#,
        );
        let err = WorldGraph::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, WorldError::TerminalHoldsItem { .. }));
    }

    #[test]
    fn test_item_count_must_match_threshold() {
        let source = tiny_world(
            r#"
            [[rooms]]
            name = "A"
            item = "Seventh Item"

            [[rooms]]
            name = "Z"
            "#,
        );
        let err = WorldGraph::from_toml_str(&source).unwrap_err();
        assert!(matches!(
            err,
            WorldError::ItemCountMismatch { expected: 6, found: 7 }
        ));
    }

    #[test]
    fn test_unreachable_item_rooms_are_rejected() {
        let mut rooms = vec![
            Room::new("A").with_exit(Direction::East, "Z"),
            Room::new("Z").with_exit(Direction::West, "A"),
        ];
        for (i, name) in ["B", "C", "D", "E", "F", "G"].iter().enumerate() {
            rooms.push(Room::new(*name).with_item(format!("item{i}").as_str()));
        }

        let err = WorldGraph::new(rooms, "A".into(), "Z".into()).unwrap_err();
        assert!(matches!(err, WorldError::Unreachable { room } if room.as_str() == "B"));
    }

    #[test]
    fn test_unreachable_terminal_is_rejected() {
        let source = tiny_world(
            r#"
            [[rooms]]
            name = "A"
            exits = { East = "B" }

            [[rooms]]
            name = "Z"
            exits = { North = "A" }
            "#,
        );
        let err = WorldGraph::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, WorldError::Unreachable { room } if room.as_str() == "Z"));
    }

    #[test]
    fn test_duplicate_rooms_and_items_are_rejected() {
        let rooms = vec![Room::new("A"), Room::new("A"), Room::new("Z")];
        let err = WorldGraph::new(rooms, "A".into(), "Z".into()).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateRoom { .. }));

        let rooms = vec![
            Room::new("A").with_item("Key"),
            Room::new("B").with_item("Key"),
            Room::new("Z"),
        ];
        let err = WorldGraph::new(rooms, "A".into(), "Z".into()).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateItem { .. }));
    }

    #[test]
    fn test_missing_start_room_is_rejected() {
        let rooms = vec![Room::new("Z")];
        let err = WorldGraph::new(rooms, "A".into(), "Z".into()).unwrap_err();
        assert!(matches!(err, WorldError::UnknownRoom(id) if id.as_str() == "A"));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = WorldGraph::from_toml_str("start_room = ").unwrap_err();
        assert!(matches!(err, WorldError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WorldGraph::load("/definitely/not/here/world.toml").unwrap_err();
        assert!(matches!(err, WorldError::Io { .. }));
    }
}
