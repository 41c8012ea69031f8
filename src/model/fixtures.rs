// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::catalog::{Catalog, Category, Entry};
use super::ids::{CategoryId, EntryId};

fn entry(id: u64, name: &str, url: &str) -> Entry {
    Entry::new(EntryId::new(id), name, url)
}

/// Built-in copy of `data/demo-catalog.json`.
pub(crate) fn reference_catalog() -> Catalog {
    let systems = Category::new(
        CategoryId::new(736),
        "Systems",
        "http://i.stack.imgur.com/8KA9j.jpg?s=32&g=1",
        "https://wwww.itschools.co.za/projects",
        vec![
            entry(2168, "API", "https://wwww.itschools.co.za/api/"),
            entry(11955, "Assets", "https://wwww.itschools.co.za/assets/"),
            entry(3179, "Design", "https://wwww.itschools.co.za/design/"),
            entry(207, "Development", "https://wwww.itschools.co.za/development/"),
            entry(70, "Intranet", "https://wwww.itschools.co.za/intranet/"),
        ],
    );

    let user_agents = Category::new(
        CategoryId::new(44315),
        "User Agents",
        "https://cdn.pixabay.com/photo/2018/09/24/08/31/pixel-cells-3699334_960_720.png",
        "https://wwww.itschools.co.za/tools",
        vec![
            entry(191599, "Alchemy", "https://wwww.itschools.co.za/tools/alchemy"),
            entry(86822, "Empathy", "https://wwww.itschools.co.za/tools/empathy"),
            entry(86297, "Epiphany", "https://wwww.itschools.co.za/tools/epiphany"),
            entry(131837, "Harmony", "https://wwww.itschools.co.za/tools/hamony"),
            entry(174338, "Zagreb", "https://wwww.itschools.co.za/tools/zagreb"),
        ],
    );

    Catalog::new(vec![systems, user_agents]).expect("reference catalog ids are unique")
}

/// Three categories where the middle one has no entries.
#[cfg(test)]
pub(crate) fn catalog_with_empty_category() -> Catalog {
    Catalog::new(vec![
        Category::new(
            CategoryId::new(1),
            "Alpha",
            "",
            "https://example.test/alpha",
            vec![
                entry(11, "One", "https://example.test/alpha/one"),
                entry(12, "Two", "https://example.test/alpha/two"),
            ],
        ),
        Category::new(CategoryId::new(2), "Bare", "", "https://example.test/bare", Vec::new()),
        Category::new(
            CategoryId::new(3),
            "Gamma",
            "",
            "https://example.test/gamma",
            vec![entry(31, "Three", "https://example.test/gamma/three")],
        ),
    ])
    .expect("fixture catalog")
}
