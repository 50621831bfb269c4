//! The built-in story: an inheritance in the mountains.

use delve_core::{CoreResult, Enemy, Item, Room, RoomId};
use delve_fiction::StoryDef;

const NORTH: &str = "north";
const SOUTH: &str = "south";
const EAST: &str = "east";
const WEST: &str = "west";
const UP: &str = "up";
const DOWN: &str = "down";

const INTRODUCTION: &str = "Weeks ago, you received a mysterious letter claiming that your late \
grandfather (who you don't know anything about) left you his house and land in the mountains. \
Having no property yourself, this is a substantial inheritance. After a few days of hiking into \
the countryside, you come upon the house, opulent and imperial, standing proudly against the \
hills leading into the mountain behind it.";

/// "The Inheritance": ten rooms, one Troll, and a harpsichord full of gold.
pub fn inheritance() -> CoreResult<StoryDef> {
    let rooms = vec![
        Room::new(
            "entrance hall",
            "You are in the entrance hall. There is a door leading further into the house to \
             the north, and an exit to the south.",
        )
        .with_transition(SOUTH, "outside")
        .with_transition(NORTH, "living room"),
        Room::new(
            "outside",
            "You decide to take what you've already found and leave. Something about this \
             place unnerves you, and you never return.",
        )
        .with_final(true),
        Room::new(
            "living room",
            "You are in the living room. There are doors to the north, south, east, and west. \
             There is a staircase going down.",
        )
        .with_item(Item::new(
            "trophy case",
            "A trophy case containing a massive golden cup",
            150,
        ))?
        .with_item(
            Item::new(
                "elven sword",
                "A leaf-bladed longsword, elven crafted.",
                150,
            )
            .into_weapon(),
        )?
        .with_item(Item::new(
            "fancy rug",
            "A large, oriental-style rug with exceptional craftsmanship.",
            100,
        ))?
        .with_transition(SOUTH, "entrance hall")
        .with_transition(NORTH, "fancy bedroom")
        .with_transition(EAST, "kitchen")
        .with_transition(WEST, "painting room")
        .with_transition(DOWN, "cellar"),
        Room::new(
            "painting room",
            "You are in the painting room. There is a Harpsichord. A painting depicts a \
             skeleton holding open a gateway to an underground passage. A male elf is entering \
             the passage. A female elf is holding a strange orb. A human man stands to the side \
             observing.",
        )
        .with_item(
            Item::new("harpsichord", "An incredibly heavy harpsichord.", 300)
                .into_attackable(Some(Item::new("gold", "Shiny gold coins.", 100))),
        )?
        .with_item(Item::new(
            "oil painting",
            "The painting depicts a skeleton holding open a gateway to an underground passage. \
             A male elf is entering the passage. A female elf is holding a strange orb. A human \
             man stands to the side observing.",
            150,
        ))?
        .with_transition(EAST, "living room"),
        Room::new(
            "kitchen",
            "You are in the kitchen. A table seems to have been used recently for the \
             preparation of food. A passage leads to the west.",
        )
        .with_item(Item::new(
            "sack of peppers",
            "A brown sack containing spicy green peppers.",
            1,
        ))?
        .with_item(Item::new(
            "glass of water",
            "A refreshing glass of cold water.",
            1,
        ))?
        .with_transition(WEST, "living room"),
        Room::new(
            "fancy bedroom",
            "You are in the fancy bedroom. There is a four-poster bed with red sheets. There is \
             a closed chest at the foot of the bed.",
        )
        .with_item(Item::new("boots", "Tough boots with spikes for climbing.", 10))?
        .with_item(Item::new("sheets", "Fancy silk sheets", 50))?
        .with_item(Item::new("coin purse", "A purse of shiny gold coins.", 100))?
        .with_transition(SOUTH, "living room"),
        Room::new(
            "cellar",
            "You are in a tidy cellar. There are barrels of wine here. A door leads to the \
             north, and a staircase goes up.",
        )
        .with_item(Item::new("wine", "A bottle of fine wine.", 50))?
        .with_transition(UP, "living room")
        .with_transition(NORTH, "library"),
        Room::new(
            "library",
            "You are in a large library. There are many books about anatomy, history, and \
             alchemy. Some of the books are written in Elven. There is a door to the south.",
        )
        .with_item(Item::new("necklace", "A ruby necklace.", 125))?
        .with_item(Item::new(
            "elven book",
            "A tome written in the indecipherable elven dialect.",
            100,
        ))?
        .with_transition("pick up elven book", "laboratory")
        .with_transition(SOUTH, "cellar"),
        Room::new(
            "laboratory",
            "You find yourself in a strange laboratory. A lamp with a red filter lights the \
             room. There is a secret passage to the south. There is a door with a skull to the \
             north.",
        )
        .with_item(Item::new(
            "orb",
            "The Orb of Yendor, an ancient artifact that has been missing for many years.",
            500,
        ))?
        .with_item(Item::new("flask", "A flask encrusted with gems.", 200))?
        .with_item(Item::new("lamp", "A lamp with a ruby-tinted filter.", 30))?
        .with_transition(NORTH, "skeleton room")
        .with_transition(SOUTH, "library"),
        Room::new(
            "skeleton room",
            "The strange door opens into darkness. You peer in, and a pair of skeletal hands \
             reach out and drags you in! The last thing you see is a strange underground \
             passage before the last of the light disappears.",
        )
        .with_final(true),
    ];

    Ok(StoryDef {
        title: "The Inheritance".to_string(),
        introduction: INTRODUCTION.to_string(),
        start: RoomId::from("entrance hall"),
        rooms,
        enemies: vec![Enemy::new(
            "Troll",
            "An ugly creature depicted as either a giant or a dwarf",
            250,
            "laboratory",
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_fiction::Story;

    #[test]
    fn builds_a_valid_game() {
        let state = inheritance().unwrap().build().unwrap();
        assert_eq!(state.world.room_count(), 10);
        assert_eq!(state.current, RoomId::from("entrance hall"));
        assert_eq!(state.enemies[0].room, RoomId::from("laboratory"));
    }

    #[test]
    fn two_final_rooms() {
        let state = inheritance().unwrap().build().unwrap();
        let mut finals: Vec<_> = state
            .world
            .rooms()
            .filter(|r| r.is_final)
            .map(|r| r.name.to_string())
            .collect();
        finals.sort();
        assert_eq!(finals, ["outside", "skeleton room"]);
    }

    #[test]
    fn library_phrase_leads_to_laboratory() {
        let state = inheritance().unwrap().build().unwrap();
        let to = state
            .world
            .destination(&RoomId::from("library"), "pick up elven book")
            .unwrap();
        assert_eq!(to, Some(&RoomId::from("laboratory")));
    }

    #[test]
    fn every_item_name_is_distinct() {
        let state = inheritance().unwrap().build().unwrap();
        let mut names: Vec<String> = state
            .world
            .rooms()
            .flat_map(|r| r.items())
            .flat_map(|item| {
                let mut item = item.clone();
                let revealed = item.destroy();
                std::iter::once(item.name).chain(revealed.map(|r| r.name))
            })
            .map(|name| name.to_lowercase())
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
