//! Static page copy and the small pieces of view state around it

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        title: "Crafted with Love",
        description: "Every piece is infused with passion and care, ensuring the highest quality and attention to detail.",
        icon: "heart",
    },
    Feature {
        title: "Luxury Design",
        description: "Premium materials and timeless aesthetics that elevate your everyday experiences to extraordinary moments.",
        icon: "crown",
    },
    Feature {
        title: "Timeless Beauty",
        description: "Classic elegance that never goes out of style, designed to be cherished for generations to come.",
        icon: "sparkles",
    },
    Feature {
        title: "Elegant Simplicity",
        description: "Minimalist sophistication that speaks volumes through thoughtful design and refined craftsmanship.",
        icon: "palette",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanId {
    Essential,
    Premium,
    Luxury,
}

impl PlanId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Essential => "essential",
            PlanId::Premium => "premium",
            PlanId::Luxury => "luxury",
        }
    }
}

pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    /// Whole US dollars
    pub price: u32,
    pub period: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    pub fn price_label(&self) -> String {
        let dollars = self.price.to_string();
        let mut grouped = String::with_capacity(dollars.len() + 2);
        for (i, digit) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        format!("${grouped}")
    }
}

pub static PLANS: [Plan; 3] = [
    Plan {
        id: PlanId::Essential,
        name: "Essential Bloom",
        price: 299,
        period: "per arrangement",
        description: "Perfect for intimate gatherings and personal spaces",
        icon: "heart",
        features: &[
            "Custom floral arrangement",
            "Premium fresh flowers",
            "Basic styling consultation",
            "Same-day delivery",
            "7-day freshness guarantee",
            "Care instructions included",
        ],
        popular: false,
    },
    Plan {
        id: PlanId::Premium,
        name: "Premium Garden",
        price: 599,
        period: "per event",
        description: "Ideal for special events and celebrations",
        icon: "star",
        features: &[
            "Multiple floral arrangements",
            "Luxury flower selection",
            "Full styling consultation",
            "Setup and breakdown service",
            "Photography coordination",
            "14-day planning support",
            "Backup arrangement included",
            "Custom color matching",
        ],
        popular: true,
    },
    Plan {
        id: PlanId::Luxury,
        name: "Luxury Bespoke",
        price: 1299,
        period: "per wedding",
        description: "Complete floral design for your dream wedding",
        icon: "crown",
        features: &[
            "Full wedding floral package",
            "Rare and exotic flowers",
            "Dedicated design team",
            "Multiple venue coordination",
            "Bridal party arrangements",
            "30-day planning process",
            "Emergency backup service",
            "Post-wedding preservation",
            "Complimentary anniversary arrangement",
        ],
        popular: false,
    },
];

/// Which pricing card is highlighted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanSelection(Option<PlanId>);

impl PlanSelection {
    pub fn selected(&self) -> Option<PlanId> {
        self.0
    }

    pub fn is_selected(&self, plan: PlanId) -> bool {
        self.0 == Some(plan)
    }

    /// Select `plan`, or clear the highlight if it was already selected
    pub fn toggle(&mut self, plan: PlanId) {
        self.0 = if self.is_selected(plan) { None } else { Some(plan) };
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub image: &'static str,
}

impl Testimonial {
    /// Two-letter monogram used while the portrait loads
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Wedding Planner",
        location: "San Francisco, CA",
        rating: 5,
        text: "Roselle transformed our wedding venue into a magical garden. The attention to detail and artistic vision exceeded all expectations. Every guest was mesmerized by the floral arrangements.",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
    Testimonial {
        name: "Michael Rodriguez",
        role: "Interior Designer",
        location: "New York, NY",
        rating: 5,
        text: "Working with Roselle has elevated my design projects to a new level. Their personalized mirror designs are absolutely stunning and add such elegance to any space.",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
    Testimonial {
        name: "Emma Thompson",
        role: "Bride",
        location: "Austin, TX",
        rating: 5,
        text: "My wedding flowers from Roselle were beyond my wildest dreams. They captured the romantic, ethereal vision I had perfectly. I still get compliments on the photos!",
        image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
    Testimonial {
        name: "David Park",
        role: "Event Coordinator",
        location: "Los Angeles, CA",
        rating: 5,
        text: "Roselle's floral decor transformed our corporate event into an unforgettable experience. Professional, creative, and absolutely beautiful work.",
        image: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop",
    },
];

/// Wrapping index over a fixed number of slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range values are ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

pub const CONTACT_EMAIL: &str = "hello@roselle.com";
pub const ACCESSIBILITY_EMAIL: &str = "accessibility@roselle.com";
pub const CONTACT_PHONE: &str = "+1-555-123-4567";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_both_ways() {
        let mut carousel = Carousel::new(TESTIMONIALS.len());
        carousel.previous();
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);

        for _ in 0..5 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_carousel_go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(2);
        carousel.go_to(9);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_empty_carousel_does_not_panic() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.previous();
        assert!(carousel.is_empty());
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_plan_selection_toggles() {
        let mut selection = PlanSelection::default();
        selection.toggle(PlanId::Premium);
        assert!(selection.is_selected(PlanId::Premium));

        selection.toggle(PlanId::Luxury);
        assert_eq!(selection.selected(), Some(PlanId::Luxury));

        selection.toggle(PlanId::Luxury);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|plan| plan.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Premium Garden");
    }

    #[test]
    fn test_price_label_groups_thousands() {
        assert_eq!(PLANS[0].price_label(), "$299");
        assert_eq!(PLANS[2].price_label(), "$1,299");
    }

    #[test]
    fn test_initials() {
        assert_eq!(TESTIMONIALS[1].initials(), "MR");
    }
}
