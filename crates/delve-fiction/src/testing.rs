//! Shared fixtures for unit tests.

use delve_core::{Enemy, Item, Room, RoomId, World};

use crate::state::GameState;

/// A compact manor: two final rooms, a weapon, a destructible item, a
/// phrase transition, and a Troll in the laboratory.
pub(crate) fn manor() -> GameState {
    let mut world = World::new();
    let rooms = [
        Room::new("entrance hall", "You are in the entrance hall.")
            .with_transition("south", "outside")
            .with_transition("north", "living room"),
        Room::new("outside", "You leave and never return.").with_final(true),
        Room::new("living room", "You are in the living room.")
            .with_item(Item::new("elven sword", "A leaf-bladed longsword.", 150).into_weapon())
            .unwrap()
            .with_item(Item::new("fancy rug", "A large, oriental-style rug.", 100))
            .unwrap()
            .with_transition("south", "entrance hall")
            .with_transition("west", "painting room")
            .with_transition("down", "cellar"),
        Room::new("painting room", "You are in the painting room.")
            .with_item(
                Item::new("harpsichord", "An incredibly heavy harpsichord.", 300)
                    .into_attackable(Some(Item::new("gold", "Shiny gold coins.", 100))),
            )
            .unwrap()
            .with_item(Item::new("oil painting", "A skeleton holds a gateway open.", 150))
            .unwrap()
            .with_transition("east", "living room"),
        Room::new("cellar", "You are in a tidy cellar.")
            .with_item(Item::new("wine", "A bottle of fine wine.", 50))
            .unwrap()
            .with_transition("up", "living room")
            .with_transition("north", "library"),
        Room::new("library", "You are in a large library.")
            .with_item(Item::new("necklace", "A ruby necklace.", 125))
            .unwrap()
            .with_item(Item::new("elven book", "An indecipherable tome.", 100))
            .unwrap()
            .with_transition("pick up elven book", "laboratory")
            .with_transition("south", "cellar"),
        Room::new("laboratory", "You find yourself in a strange laboratory.")
            .with_item(Item::new("orb", "The Orb of Yendor.", 500))
            .unwrap()
            .with_transition("north", "skeleton room")
            .with_transition("south", "library"),
        Room::new("skeleton room", "Skeletal hands drag you into darkness.").with_final(true),
    ];
    for room in rooms {
        world.add_room(room).unwrap();
    }

    GameState::new(
        "Test Manor",
        "You arrive at the manor.",
        world,
        RoomId::from("entrance hall"),
        vec![Enemy::new("Troll", "An ugly creature.", 250, "laboratory")],
    )
    .unwrap()
}

/// Put the player in `room` without any turn processing.
pub(crate) fn teleport(state: &mut GameState, room: &str) {
    state.current = RoomId::from(room);
}

/// Hand the player an item directly.
pub(crate) fn give(state: &mut GameState, item: Item) {
    state
        .inventory
        .add(delve_core::Carried::Item(item))
        .unwrap();
}
