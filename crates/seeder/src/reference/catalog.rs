//! Product catalog: categories and the (name, description) pairs sold in each.

/// One product line within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Product name shown in the dashboard.
    pub name: &'static str,
    /// One-line marketing description.
    pub description: &'static str,
}

/// A category and its product lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogCategory {
    /// Category label stored on each product.
    pub name: &'static str,
    /// Product lines in this category.
    pub items: &'static [CatalogItem],
}

const fn item(name: &'static str, description: &'static str) -> CatalogItem {
    CatalogItem { name, description }
}

/// The full catalog.
pub const CATALOG: &[CatalogCategory] = &[
    CatalogCategory {
        name: "Electronics",
        items: &[
            item("Smartphone", "A cutting-edge mobile device with advanced features"),
            item("Laptop", "High-performance computing solution for professionals"),
            item("Wireless Earbuds", "Noise-cancelling audio experience"),
            item("Smart Watch", "Fitness and communication companion"),
            item("Tablet", "Portable computing device with versatile functionality"),
            item("Gaming Console", "Immersive entertainment system for gamers"),
            item("4K Smart TV", "Ultra-high definition television with smart features"),
            item("Wireless Charger", "Convenient and fast charging solution"),
            item("Digital Camera", "Professional-grade photography equipment"),
            item("Bluetooth Speaker", "Portable audio device with superior sound quality"),
        ],
    },
    CatalogCategory {
        name: "Clothing",
        items: &[
            item("Men's T-Shirt", "Comfortable and stylish casual wear"),
            item("Women's Dress", "Elegant and versatile fashion piece"),
            item("Running Shoes", "Performance athletic footwear"),
            item("Winter Jacket", "Warm and protective outerwear"),
            item("Jeans", "Classic denim pants for everyday wear"),
            item("Hoodie", "Comfortable and trendy casual top"),
            item("Formal Suit", "Professional and sophisticated business attire"),
            item("Yoga Pants", "Flexible and comfortable exercise wear"),
            item("Leather Jacket", "Timeless and stylish outerwear"),
            item("Swimwear", "Fashionable beach and pool attire"),
        ],
    },
    CatalogCategory {
        name: "Home & Kitchen",
        items: &[
            item("Coffee Maker", "Precision brewing for coffee enthusiasts"),
            item("Blender", "Powerful kitchen appliance for smoothies and more"),
            item("Cookware Set", "Professional-grade cooking equipment"),
            item("Smart Speaker", "Voice-activated home assistant"),
            item("Air Fryer", "Healthy cooking technology with minimal oil"),
            item("Microwave Oven", "Convenient and quick heating solution"),
            item("Electric Kettle", "Fast and efficient water boiling"),
            item("Stand Mixer", "Professional-grade baking and cooking tool"),
            item("Refrigerator", "Energy-efficient food storage with smart features"),
            item("Toaster Oven", "Versatile cooking appliance for multiple dishes"),
        ],
    },
    CatalogCategory {
        name: "Books",
        items: &[
            item("Bestseller Novel", "Gripping narrative by a renowned author"),
            item("Cookbook", "Culinary guide with expert recipes"),
            item("Self-Help Book", "Personal development and motivation"),
            item("Science Fiction", "Imaginative journey through alternate worlds"),
            item("Biography", "Inspiring life story of a notable personality"),
            item("History Book", "Comprehensive exploration of historical events"),
            item("Children's Picture Book", "Engaging storytelling for young readers"),
            item("Poetry Collection", "Artistic expression through verse"),
            item("Travel Guide", "Comprehensive destination exploration"),
            item("Technical Manual", "In-depth professional reference"),
        ],
    },
    CatalogCategory {
        name: "Sports & Outdoors",
        items: &[
            item("Hiking Backpack", "Durable and comfortable outdoor gear"),
            item("Fitness Tracker", "Advanced health and activity monitoring"),
            item("Camping Tent", "Reliable shelter for outdoor adventures"),
            item("Yoga Mat", "Premium exercise and meditation accessory"),
            item("Bicycle", "High-performance cycling equipment"),
            item("Sleeping Bag", "Comfortable and warm outdoor sleeping solution"),
            item("Trekking Poles", "Stability and support for hiking"),
            item("Portable Grill", "Compact cooking solution for outdoor enthusiasts"),
            item("Waterproof Jacket", "Protection from harsh weather conditions"),
            item("Climbing Harness", "Safety equipment for rock climbing"),
        ],
    },
    CatalogCategory {
        name: "Beauty & Personal Care",
        items: &[
            item("Skincare Set", "Comprehensive beauty and wellness routine"),
            item("Beard Trimmer", "Precision grooming for men"),
            item("Hair Dryer", "Professional styling tool"),
            item("Makeup Palette", "Versatile color collection"),
            item("Electric Toothbrush", "Advanced dental hygiene solution"),
            item("Facial Cleanser", "Deep cleansing and skin rejuvenation"),
            item("Moisturizer", "Hydrating and nourishing skin care"),
            item("Perfume", "Elegant and long-lasting fragrance"),
            item("Hair Straightener", "Professional styling for smooth hair"),
            item("Makeup Brush Set", "High-quality tools for flawless application"),
        ],
    },
    CatalogCategory {
        name: "Toys & Games",
        items: &[
            item("Board Game", "Engaging family entertainment"),
            item("Remote Control Car", "High-speed RC vehicle"),
            item("Puzzle Set", "Challenging and educational"),
            item("Building Blocks", "Creative construction toy"),
            item("Educational Tablet", "Interactive learning device for children"),
            item("LEGO Set", "Advanced building and creativity kit"),
            item("Science Experiment Kit", "Hands-on learning for young scientists"),
            item("Art Supply Set", "Creative tools for artistic expression"),
            item("Musical Instrument", "Beginner-friendly music learning"),
            item("Outdoor Playground Set", "Active play equipment for children"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.len(), 7);
        for category in CATALOG {
            assert_eq!(category.items.len(), 10, "{}", category.name);
        }
    }

    #[test]
    fn test_category_names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_items_have_descriptions() {
        for item in CATALOG.iter().flat_map(|c| c.items) {
            assert!(!item.name.is_empty());
            assert!(!item.description.is_empty(), "{}", item.name);
        }
    }
}
