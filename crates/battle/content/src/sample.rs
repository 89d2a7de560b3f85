//! Sample battle content.
//!
//! A compact, hand-written content set for integration tests, demos, and
//! content-pipeline smoke checks. Real games ship their own data files; this
//! module exists so the engine can be exercised without any on-disk content.

use std::sync::Arc;

use battle_core::{
    AttributeKind, AttributeSet, Catalogs, Combatant, Element, ItemDefinition, ItemRegistry,
    ItemUse, SpellDefinition, SpellKinds, SpellRegistry, SpellTarget, StatusDefinition,
    StatusRegistry, StatusTick,
};

/// All sample spells.
pub fn spells() -> Vec<SpellDefinition> {
    vec![
        SpellDefinition::new("Fire", SpellKinds::DAMAGE, SpellTarget::SingleEnemy)
            .with_mp_cost(4)
            .with_power(30)
            .with_element(Element::Fire),
        SpellDefinition::new("Heal", SpellKinds::HEAL, SpellTarget::SingleAlly)
            .with_mp_cost(5)
            .with_power(25),
        SpellDefinition::new(
            "Venom",
            SpellKinds::DAMAGE | SpellKinds::CAUSE_STATUS,
            SpellTarget::SingleEnemy,
        )
        .with_mp_cost(6)
        .with_power(15)
        .with_status("Poison", 60),
        SpellDefinition::new("Lullaby", SpellKinds::CAUSE_STATUS, SpellTarget::SingleEnemy)
            .with_mp_cost(3)
            .with_status("Sleep", 70),
        SpellDefinition::new("Purify", SpellKinds::REMOVE_STATUS, SpellTarget::SingleAlly)
            .with_mp_cost(4)
            .with_status("Poison", 100),
        SpellDefinition::new("War Cry", SpellKinds::BUFF, SpellTarget::SingleAlly)
            .with_mp_cost(6)
            .with_power(25)
            .with_buff(AttributeKind::Strength)
            .with_buff(AttributeKind::Defense),
    ]
}

/// All sample items.
pub fn items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new("Potion", ItemUse::HealFixed { hp: 30 }),
        ItemDefinition::new("Ether", ItemUse::RestoreMpFixed { mp: 20 }),
        ItemDefinition::new(
            "Bomb",
            ItemUse::DamageScaling {
                strength: 20,
                power: 15,
            },
        ),
        ItemDefinition::new(
            "Herb",
            ItemUse::HealScaling {
                strength: 12,
                power: 10,
            },
        ),
    ]
}

/// All sample status conditions.
pub fn statuses() -> Vec<StatusDefinition> {
    vec![
        StatusDefinition::new("Poison", "is poisoned!", "shakes off the poison.")
            .with_tick(StatusTick::damage(10)),
        StatusDefinition::new("Sleep", "falls asleep!", "wakes up.")
            .with_prevents_action()
            .with_tick(StatusTick::recover(50)),
    ]
}

/// Registry-backed catalogs over the sample content.
pub fn catalogs() -> Catalogs {
    Catalogs::new(
        Arc::new(SpellRegistry::new(spells())),
        Arc::new(ItemRegistry::new(items())),
        Arc::new(StatusRegistry::new(statuses())),
    )
}

/// A frontline attacker.
pub fn hero() -> Combatant {
    Combatant::new("Hero", AttributeSet::new(10, 20, 15, 8, 10, 8, 12), 80, 20)
}

/// A caster with enough mp for a few spells.
pub fn mage() -> Combatant {
    Combatant::new("Mage", AttributeSet::new(9, 8, 6, 22, 7, 14, 10), 55, 40)
}

/// A weak monster.
pub fn slime() -> Combatant {
    Combatant::new("Slime", AttributeSet::new(4, 9, 7, 2, 6, 4, 5), 35, 0).with_reward(15, 10)
}

/// A faster, harder-hitting monster, weak to fire.
pub fn wolf() -> Combatant {
    Combatant::new("Wolf", AttributeSet::new(7, 14, 11, 3, 8, 5, 14), 50, 0)
        .with_reward(28, 18)
        .with_resistance(Element::Fire, 150)
}
