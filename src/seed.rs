// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sample projects loaded into a fresh store for demos.

use crate::models::{Animation, Cta, CtaId, CtaStyle, CtaType, Position, Project, ProjectId};
use chrono::{DateTime, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn style(pairs: &[(&str, &str)]) -> CtaStyle {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn cta(
    id: &str,
    cta_type: CtaType,
    text: &str,
    position: (f64, f64),
    style: CtaStyle,
    animation: Animation,
    link: &str,
    window: (f64, f64),
) -> Cta {
    Cta {
        id: CtaId::from(id),
        cta_type,
        text: text.to_string(),
        position: Position::new(position.0, position.1),
        style,
        animation,
        link: link.to_string(),
        start_time: window.0,
        end_time: window.1,
    }
}

/// The three demo projects: a product review, a cooking tutorial and a tech review.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::from("1"),
            name: "Product Review - Fitness Watch".to_string(),
            description: "Review video with affiliate CTAs for fitness watch".to_string(),
            video_url: "https://www.youtube.com/watch?v=UBMk30rjy0o".to_string(),
            thumbnail: "https://images.pexels.com/photos/4498482/pexels-photo-4498482.jpeg".to_string(),
            created: date(2023, 7, 15),
            updated: date(2023, 7, 18),
            ctas: vec![
                cta(
                    "cta1",
                    CtaType::Button,
                    "Get 20% Off Today",
                    (50.0, 70.0),
                    style(&[
                        ("backgroundColor", "#ff4757"),
                        ("color", "white"),
                        ("fontSize", "16px"),
                        ("padding", "10px 20px"),
                        ("borderRadius", "30px"),
                    ]),
                    Animation::Bounce,
                    "https://example.com/product/fitness-watch",
                    (5.0, 15.0),
                ),
                cta(
                    "cta2",
                    CtaType::Banner,
                    "Limited Time Offer",
                    (50.0, 20.0),
                    style(&[
                        ("backgroundColor", "rgba(0, 0, 0, 0.7)"),
                        ("color", "white"),
                        ("fontSize", "14px"),
                        ("padding", "8px 16px"),
                        ("borderRadius", "4px"),
                    ]),
                    Animation::Fade,
                    "https://example.com/offer",
                    (20.0, 30.0),
                ),
            ],
        },
        Project {
            id: ProjectId::from("2"),
            name: "Cooking Tutorial - Kitchen Gadgets".to_string(),
            description: "Cooking tutorial with affiliate links to kitchen tools".to_string(),
            video_url: "https://www.youtube.com/watch?v=ZJy1ajvMU1k".to_string(),
            thumbnail: "https://images.pexels.com/photos/1267320/pexels-photo-1267320.jpeg".to_string(),
            created: date(2023, 6, 10),
            updated: date(2023, 6, 12),
            ctas: vec![cta(
                "cta3",
                CtaType::Button,
                "Shop This Knife Set",
                (20.0, 80.0),
                style(&[
                    ("backgroundColor", "#2ed573"),
                    ("color", "white"),
                    ("fontSize", "16px"),
                    ("padding", "10px 20px"),
                    ("borderRadius", "4px"),
                ]),
                Animation::Slide,
                "https://example.com/product/knife-set",
                (10.0, 20.0),
            )],
        },
        Project {
            id: ProjectId::from("3"),
            name: "Tech Review - Latest Smartphone".to_string(),
            description: "In-depth review of the newest smartphone with affiliate links".to_string(),
            video_url: "https://www.youtube.com/watch?v=FT3ODSg1GFE".to_string(),
            thumbnail: "https://images.pexels.com/photos/47261/pexels-photo-47261.jpeg".to_string(),
            created: date(2023, 8, 5),
            updated: date(2023, 8, 7),
            ctas: vec![
                cta(
                    "cta4",
                    CtaType::Button,
                    "Buy Now with $50 Off",
                    (75.0, 60.0),
                    style(&[
                        ("backgroundColor", "#1e90ff"),
                        ("color", "white"),
                        ("fontSize", "16px"),
                        ("padding", "10px 20px"),
                        ("borderRadius", "8px"),
                        ("boxShadow", "0 4px 6px rgba(0,0,0,0.1)"),
                    ]),
                    Animation::Bounce,
                    "https://example.com/product/smartphone",
                    (15.0, 30.0),
                ),
                cta(
                    "cta5",
                    CtaType::Banner,
                    "Exclusive Discount Code: TECH2023",
                    (50.0, 10.0),
                    style(&[
                        ("backgroundColor", "rgba(0, 0, 0, 0.8)"),
                        ("color", "white"),
                        ("fontSize", "14px"),
                        ("padding", "8px 16px"),
                        ("borderRadius", "4px"),
                        ("fontWeight", "bold"),
                    ]),
                    Animation::Slide,
                    "https://example.com/discount",
                    (40.0, 55.0),
                ),
            ],
        },
    ]
}
