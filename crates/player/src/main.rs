//! Ficha Player - command line front end for the character sheet client.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ficha_domain::{
    ArmorId, AttributeChange, AttributeKind, CharacterId, CosmeticSlot, EntryName, EntryRef,
    HandView, ItemId, NewEntry, NewItem, Quantity, SkillKind, WeaponId,
};
use ficha_player::infrastructure::{HttpClient, SheetApi};
use ficha_player::ports::outbound::CharacterPort;
use ficha_player::services::{
    CosmeticsService, EquipmentManager, EquipmentPorts, SkillsService, VitalsAggregator,
};
use ficha_player::PlayerConfig;

/// Character sheet client
#[derive(Parser)]
#[command(name = "ficha-player")]
#[command(about = "Inventory, equipment and derived stats of a character sheet", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Show capacity, inventory, armor total and hands
    Show {
        character: i64,
    },

    /// Equip an armor piece or weapon
    Equip {
        character: i64,
        #[arg(value_enum)]
        kind: EquippableKind,
        id: i64,
    },

    /// Unequip an armor piece or weapon
    Unequip {
        character: i64,
        #[arg(value_enum)]
        kind: EquippableKind,
        id: i64,
    },

    /// Add a plain item to the inventory
    AddItem {
        character: i64,
        name: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Delete an inventory entry
    Delete {
        character: i64,
        #[arg(value_enum)]
        kind: EntryKindArg,
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Set or adjust one attribute, clamped to 0..=20
    Attribute {
        character: i64,
        /// Attribute name, e.g. forca or constitution
        attribute: AttributeKind,
        #[arg(long, conflicts_with = "adjust", required_unless_present = "adjust")]
        set: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        adjust: Option<i64>,
    },

    /// Set or adjust one skill, clamped to 0..=20
    Skill {
        character: i64,
        /// Skill name, e.g. furtividade or stealth
        skill: SkillKind,
        #[arg(long, conflicts_with = "adjust", required_unless_present = "adjust")]
        set: Option<i64>,
        #[arg(long, allow_hyphen_values = true)]
        adjust: Option<i64>,
    },

    /// Cosmetic paper-doll slots
    #[command(subcommand)]
    Cosmetic(CosmeticCommand),
}

#[derive(Parser)]
enum CosmeticCommand {
    /// Put an image in a slot
    Set {
        character: i64,
        slot: CosmeticSlot,
        image: String,
    },
    /// Empty a slot
    Clear {
        character: i64,
        slot: CosmeticSlot,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum EquippableKind {
    Armor,
    Weapon,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum EntryKindArg {
    Item,
    Armor,
    Weapon,
}

impl EquippableKind {
    fn entry(self, id: i64) -> EntryRef {
        match self {
            Self::Armor => EntryRef::Armor(ArmorId::new(id)),
            Self::Weapon => EntryRef::Weapon(WeaponId::new(id)),
        }
    }
}

impl EntryKindArg {
    fn entry(self, id: i64) -> EntryRef {
        match self {
            Self::Item => EntryRef::Item(ItemId::new(id)),
            Self::Armor => EntryRef::Armor(ArmorId::new(id)),
            Self::Weapon => EntryRef::Weapon(WeaponId::new(id)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ficha_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = PlayerConfig::from_env().context("invalid configuration")?;
    tracing::debug!(api = %config.api_base_url, "Using sheet backend");
    let raw = Arc::new(HttpClient::from_config(&config).context("failed to build HTTP client")?);
    let api = Arc::new(SheetApi::new(raw));

    match cli.command {
        Command::Show { character } => {
            let manager = load_manager(&api, character).await?;
            show(&manager).await;
        }
        Command::Equip { character, kind, id } => {
            set_equipped(&api, character, kind.entry(id), true).await?;
        }
        Command::Unequip { character, kind, id } => {
            set_equipped(&api, character, kind.entry(id), false).await?;
        }
        Command::AddItem {
            character,
            name,
            quantity,
        } => {
            let form = NewItem::new(EntryName::new(name)?).with_quantity(Quantity::new(quantity)?);
            let manager = load_manager(&api, character).await?;
            let created = manager.add_entry(NewEntry::Item(form)).await?;
            println!("Created {} ({})", created, manager.capacity().await);
        }
        Command::Delete {
            character,
            kind,
            id,
            yes,
        } => {
            let entry = kind.entry(id);
            if !yes {
                bail!("refusing to delete {} without --yes", entry);
            }
            let manager = load_manager(&api, character).await?;
            let report = manager.delete_entry(entry).await?;
            println!("Deleted {}", report.entry);
            if let Some(sync) = report.armor {
                println!("Armor total: {}", sync.total());
            }
        }
        Command::Attribute {
            character,
            attribute,
            set,
            adjust,
        } => {
            let change = score_change(set, adjust)?;
            let owner = CharacterId::new(character);
            let sheet = api.get_character(owner).await?;
            let vitals = VitalsAggregator::new(api.clone(), api.clone());
            let update = vitals
                .adjust(owner, &sheet.attributes, attribute, change)
                .await?;
            println!("{}: {}", attribute, update.attributes.get(attribute));
            if let Some(vital) = update.vital {
                let note = if vital.persisted { "" } else { " (no status record)" };
                println!("{}: {}{}", vital.field, vital.value, note);
            }
        }
        Command::Skill {
            character,
            skill,
            set,
            adjust,
        } => {
            let change = score_change(set, adjust)?;
            let owner = CharacterId::new(character);
            let sheet = api.get_character(owner).await?;
            let skills = SkillsService::new(api.clone());
            let updated = skills.adjust(owner, &sheet.skills, skill, change).await?;
            println!("{}: {}", skill, updated.get(skill));
        }
        Command::Cosmetic(command) => {
            let (character, slot, image) = match command {
                CosmeticCommand::Set {
                    character,
                    slot,
                    image,
                } => (character, slot, Some(image)),
                CosmeticCommand::Clear { character, slot } => (character, slot, None),
            };
            let cosmetics = CosmeticsService::new(api.clone(), CharacterId::new(character));
            cosmetics.fetch().await?;
            let loadout = cosmetics.set_slot(slot, image).await?;
            for (slot, path) in loadout.iter() {
                println!("{:<16} {}", slot.to_string(), path);
            }
        }
    }

    Ok(())
}

fn score_change(set: Option<i64>, adjust: Option<i64>) -> Result<AttributeChange> {
    match (set, adjust) {
        (Some(value), _) => Ok(AttributeChange::Set(value)),
        (None, Some(delta)) => Ok(AttributeChange::Adjust(delta)),
        (None, None) => bail!("pass --set or --adjust"),
    }
}

async fn load_manager(api: &Arc<SheetApi>, character: i64) -> Result<EquipmentManager> {
    let ports = EquipmentPorts {
        characters: api.clone(),
        inventory: api.clone(),
        status: api.clone(),
    };
    EquipmentManager::load(ports, CharacterId::new(character))
        .await
        .with_context(|| format!("failed to load character {}", character))
}

async fn set_equipped(api: &Arc<SheetApi>, character: i64, entry: EntryRef, equip: bool) -> Result<()> {
    let manager = load_manager(api, character).await?;
    let report = manager.equip_entry(entry, equip).await?;

    let verb = if report.equipped { "Equipped" } else { "Unequipped" };
    println!("{} {}", verb, report.entry);
    for displaced in &report.displaced {
        println!("Unequipped {} (same slot)", displaced);
    }
    if let Some(sync) = report.armor {
        println!("Armor total: {}", sync.total());
    }
    Ok(())
}

async fn show(manager: &EquipmentManager) {
    manager
        .with_state(|state| {
            let capacity = state.capacity();
            println!("{} (#{})", state.character.name, state.character.id);
            println!(
                "Inventory: {}{}",
                capacity,
                if capacity.is_full() { " (full)" } else { "" }
            );
            println!("Armor total: {}", state.character.status.armor);
            for entry in state.entries() {
                let mark = if entry.is_equipped() { "*" } else { " " };
                println!(" {} {:<16} {}", mark, entry.entry_ref().to_string(), entry.name());
            }

            let hands = state.hands();
            print_hand("Right hand", &hands.right);
            print_hand("Left hand", &hands.left);
        })
        .await;
}

fn print_hand(label: &str, hand: &HandView) {
    println!(
        "{}: {} | damage {} | {} attacks/turn | range {}",
        label,
        hand.weapon_name.as_deref().unwrap_or("(empty)"),
        hand.damage,
        hand.attacks_per_turn,
        hand.range
    );
}
