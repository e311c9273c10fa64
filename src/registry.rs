// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static category registry.
//!
//! Categories are a closed set defined at compile time. Icons and colors are
//! enumerations rather than free-form strings, so a registry entry can only
//! reference tokens the presentation layer knows how to draw.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoryId {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Salary,
    Freelance,
    Health,
    Other,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Food => "food",
            CategoryId::Transport => "transport",
            CategoryId::Shopping => "shopping",
            CategoryId::Entertainment => "entertainment",
            CategoryId::Salary => "salary",
            CategoryId::Freelance => "freelance",
            CategoryId::Health => "health",
            CategoryId::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Utensils,
    Car,
    ShoppingBag,
    Ticket,
    Briefcase,
    Code,
    HeartPulse,
    CircleEllipsis,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Utensils => "Utensils",
            Icon::Car => "Car",
            Icon::ShoppingBag => "ShoppingBag",
            Icon::Ticket => "Ticket",
            Icon::Briefcase => "Briefcase",
            Icon::Code => "Code",
            Icon::HeartPulse => "HeartPulse",
            Icon::CircleEllipsis => "CircleEllipsis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    Orange,
    Blue,
    Pink,
    Purple,
    Emerald,
    Indigo,
    Red,
    Zinc,
}

impl Color {
    /// Style token understood by the presentation layer.
    pub fn token(&self) -> &'static str {
        match self {
            Color::Orange => "bg-orange-500",
            Color::Blue => "bg-blue-500",
            Color::Pink => "bg-pink-500",
            Color::Purple => "bg-purple-500",
            Color::Emerald => "bg-emerald-500",
            Color::Indigo => "bg-indigo-500",
            Color::Red => "bg-red-500",
            Color::Zinc => "bg-zinc-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub icon: Icon,
    pub color: Color,
}

const fn category(id: CategoryId, name: &'static str, icon: Icon, color: Color) -> Category {
    Category {
        id,
        name,
        icon,
        color,
    }
}

/// Registry entries in picker order. `other` is last and doubles as the
/// fallback for unknown ids.
pub static CATEGORIES: [Category; 8] = [
    category(CategoryId::Food, "Food", Icon::Utensils, Color::Orange),
    category(CategoryId::Transport, "Transport", Icon::Car, Color::Blue),
    category(CategoryId::Shopping, "Shopping", Icon::ShoppingBag, Color::Pink),
    category(CategoryId::Entertainment, "Fun", Icon::Ticket, Color::Purple),
    category(CategoryId::Salary, "Salary", Icon::Briefcase, Color::Emerald),
    category(CategoryId::Freelance, "Freelance", Icon::Code, Color::Indigo),
    category(CategoryId::Health, "Health", Icon::HeartPulse, Color::Red),
    category(CategoryId::Other, "Other", Icon::CircleEllipsis, Color::Zinc),
];

fn other() -> &'static Category {
    &CATEGORIES[CATEGORIES.len() - 1]
}

pub fn all() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by id, falling back to `other` for anything unknown.
pub fn resolve(id: &str) -> &'static Category {
    lookup(id).unwrap_or_else(other)
}

/// Exact lookup without the fallback. Used to detect dangling ids.
pub fn lookup(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id.as_str() == id)
}
