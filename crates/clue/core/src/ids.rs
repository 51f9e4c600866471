//! Named identifiers for items referenced by the shipped requirement groups.
//!
//! Only canonical items and the individually excluded variants are named here.
//! The full variant lists live in the content data files.

use crate::item::ItemId;

// ===== equipment with variation groups =====
pub const SLAYER_HELMET: ItemId = ItemId(11864);
pub const RING_OF_WEALTH: ItemId = ItemId(2572);
pub const PHARAOHS_SCEPTRE: ItemId = ItemId(9044);
pub const ABYSSAL_WHIP: ItemId = ItemId(4151);
pub const ABYSSAL_WHIP_4178: ItemId = ItemId(4178);
pub const ABYSSAL_WHIP_20405: ItemId = ItemId(20405);
pub const ABYSSAL_TENTACLE: ItemId = ItemId(12006);
pub const TEAM1_CAPE: ItemId = ItemId(4315);
pub const TEAM_CAPE_ZERO: ItemId = ItemId(20211);
pub const TEAM_CAPE_I: ItemId = ItemId(20214);
pub const TEAM_CAPE_X: ItemId = ItemId(20217);

// ===== defenders =====
pub const DRAGON_DEFENDER: ItemId = ItemId(12954);
pub const DRAGON_DEFENDER_T: ItemId = ItemId(19722);
pub const DRAGON_DEFENDER_BROKEN: ItemId = ItemId(20463);
pub const AVERNIC_DEFENDER: ItemId = ItemId(22322);
pub const AVERNIC_DEFENDER_BROKEN: ItemId = ItemId(22441);
pub const GHOMMALS_AVERNIC_DEFENDER_5: ItemId = ItemId(27550);

// ===== god books =====
pub const HOLY_BOOK: ItemId = ItemId(3840);
pub const UNHOLY_BOOK: ItemId = ItemId(3842);
pub const UNHOLY_BOOK_27191: ItemId = ItemId(27191);
pub const BOOK_OF_BALANCE: ItemId = ItemId(3844);
pub const BOOK_OF_WAR: ItemId = ItemId(12608);
pub const BOOK_OF_LAW: ItemId = ItemId(12610);
pub const BOOK_OF_DARKNESS: ItemId = ItemId(12612);

// ===== ranged =====
pub const CRYSTAL_BOW: ItemId = ItemId(23983);
pub const CRYSTAL_BOW_24123: ItemId = ItemId(24123);
pub const BOW_OF_FAERDHINEN_INACTIVE: ItemId = ItemId(25862);
pub const BOW_OF_FAERDHINEN: ItemId = ItemId(25865);

// ===== jewellery =====
pub const RING_OF_DUELING8: ItemId = ItemId(2552);
pub const RING_OF_DUELING1: ItemId = ItemId(2566);
pub const AMULET_OF_GLORY: ItemId = ItemId(1704);
pub const AMULET_OF_GLORY4: ItemId = ItemId(1712);
pub const AMULET_OF_GLORY_T4: ItemId = ItemId(10354);

// ===== tools =====
pub const BRONZE_PICKAXE: ItemId = ItemId(1265);
pub const RUNE_PICKAXE: ItemId = ItemId(1275);
pub const DRAGON_PICKAXE: ItemId = ItemId(11920);
pub const CRYSTAL_PICKAXE_INACTIVE: ItemId = ItemId(23682);
pub const BRONZE_AXE: ItemId = ItemId(1351);
pub const RUNE_AXE: ItemId = ItemId(1359);
pub const DRAGON_FELLING_AXE: ItemId = ItemId(28217);
pub const HARPOON: ItemId = ItemId(311);
pub const DRAGON_HARPOON: ItemId = ItemId(21028);
pub const HAMMER: ItemId = ItemId(2347);
pub const IMCANDO_HAMMER: ItemId = ItemId(25644);

// ===== graceful and its cape substitutes =====
pub const GRACEFUL_HOOD: ItemId = ItemId(11850);
pub const GRACEFUL_CAPE: ItemId = ItemId(11852);
pub const GRACEFUL_TOP: ItemId = ItemId(11854);
pub const GRACEFUL_LEGS: ItemId = ItemId(11856);
pub const GRACEFUL_GLOVES: ItemId = ItemId(11858);
pub const GRACEFUL_BOOTS: ItemId = ItemId(11860);
pub const AGILITY_CAPE: ItemId = ItemId(9771);
pub const MAX_CAPE: ItemId = ItemId(13280);

// ===== stoles and mitres =====
pub const SARADOMIN_STOLE: ItemId = ItemId(10470);
pub const ZAMORAK_MITRE: ItemId = ItemId(10456);
