/// Synthetic posts, products, reviews and notifications for screens
/// that have no backend.
use rand::RngExt;

use crate::color::random_color;
use crate::types::{
    DummyNotification, DummyPost, DummyProduct, DummyReview, NotificationKind, ProductCategory,
};

const POST_IMAGES: [&str; 4] = [
    "assets/samples/post_cafe.jpg",
    "assets/samples/post_headphones.jpg",
    "assets/samples/post_hotel.jpg",
    "assets/samples/post_salon.jpg",
];

const PRODUCT_IMAGES: [&str; 6] = [
    "assets/samples/product_phone.jpg",
    "assets/samples/product_bistro.jpg",
    "assets/samples/product_serum.jpg",
    "assets/samples/product_resort.jpg",
    "assets/samples/product_plumber.jpg",
    "assets/samples/product_speaker.jpg",
];

const POST_TITLES: &[&str] = &[
    "Honest thoughts after a month",
    "Would I buy it again?",
    "Better than expected",
    "Not quite what the photos promised",
    "Hidden gem downtown",
    "Worth the wait",
    "Quick take",
    "My go-to from now on",
];

const POST_BODIES: &[&str] = &[
    "Setup took five minutes and it has worked every day since.",
    "Friendly staff, a short wait, and fair prices for the area.",
    "Solid build quality, though the battery could last longer.",
    "The room was spotless and the view made up for the noise.",
    "Booked on a whim and left genuinely impressed.",
    "A couple of rough edges, but support sorted them out quickly.",
];

const PRODUCT_NAMES: &[&str] = &[
    "Aurora Earbuds",
    "Luna Bistro",
    "Glow Serum",
    "Seaside Retreat",
    "QuickFix Plumbing",
    "Nimbus Speaker",
    "Copper Kettle Cafe",
    "Velvet Salon",
    "Summit Lodge",
    "BrightHome Cleaning",
];

const PEOPLE: &[&str] = &[
    "Ana", "Bilal", "Chen", "Dario", "Elif", "Femi", "Greta", "Hiro", "Ines", "Jonas",
];

const REVIEW_TEXTS: &[&str] = &[
    "Exactly as described.",
    "Good value, would recommend.",
    "Average at best.",
    "Customer service was excellent.",
    "Took a while to arrive but works great.",
    "Not for me, but I see the appeal.",
];

/// Hands out sequential ids. Only ever increases.
#[derive(Clone, Debug, Default)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Owns the id counters for every kind of synthetic record. Ids are unique
/// for as long as the generator lives.
#[derive(Clone, Debug, Default)]
pub struct DataGenerator {
    posts: IdSequence,
    products: IdSequence,
    reviews: IdSequence,
    notifications: IdSequence,
}

impl DataGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_posts(&mut self, count: usize) -> Vec<DummyPost> {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| {
                let n = self.posts.next_id();
                let title = POST_TITLES[rng.random_range(0..POST_TITLES.len())];
                let content = POST_BODIES[rng.random_range(0..POST_BODIES.len())];
                DummyPost {
                    id: format!("post_{n}"),
                    title: title.to_string(),
                    content: content.to_string(),
                    images: POST_IMAGES.to_vec(),
                    rating: rng.random_range(3.0..5.0),
                }
            })
            .collect()
    }

    pub fn generate_products(&mut self, count: usize) -> Vec<DummyProduct> {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| {
                let n = self.products.next_id();
                let category = ProductCategory::ALL[rng.random_range(0..ProductCategory::ALL.len())];
                let rating: f64 = rng.random_range(1.0..=5.0);
                DummyProduct {
                    id: format!("product_{n}"),
                    name: PRODUCT_NAMES[rng.random_range(0..PRODUCT_NAMES.len())].to_string(),
                    category,
                    rating: format!("{rating:.1}"),
                    number_of_ratings: rng.random_range(1..=1000),
                    image: PRODUCT_IMAGES[(n % PRODUCT_IMAGES.len() as u64) as usize],
                }
            })
            .collect()
    }

    pub fn generate_reviews(&mut self, product_id: &str, count: usize) -> Vec<DummyReview> {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| {
                let n = self.reviews.next_id();
                DummyReview {
                    id: format!("review_{n}"),
                    product_id: product_id.to_string(),
                    author: PEOPLE[rng.random_range(0..PEOPLE.len())].to_string(),
                    avatar_color: random_color(),
                    stars: rng.random_range(1..=5),
                    text: REVIEW_TEXTS[rng.random_range(0..REVIEW_TEXTS.len())].to_string(),
                }
            })
            .collect()
    }

    pub fn generate_notifications(&mut self, count: usize) -> Vec<DummyNotification> {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| {
                let n = self.notifications.next_id();
                DummyNotification {
                    id: format!("notification_{n}"),
                    kind: NotificationKind::ALL[rng.random_range(0..NotificationKind::ALL.len())],
                    actor: PEOPLE[rng.random_range(0..PEOPLE.len())].to_string(),
                    read: rng.random_range(0..3) == 0,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn zero_count_is_empty() {
        let mut generator = DataGenerator::new();
        assert!(generator.generate_posts(0).is_empty());
        assert!(generator.generate_products(0).is_empty());
        assert!(generator.generate_reviews("product_0", 0).is_empty());
        assert!(generator.generate_notifications(0).is_empty());
    }

    #[test]
    fn posts_have_distinct_ids_and_ratings_in_range() {
        let mut generator = DataGenerator::new();
        let posts = generator.generate_posts(5);
        assert_eq!(posts.len(), 5);
        let ids: HashSet<_> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 5);
        for post in &posts {
            assert!((3.0..5.0).contains(&post.rating), "rating {}", post.rating);
            assert_eq!(post.images, POST_IMAGES.to_vec());
        }
    }

    #[test]
    fn post_ids_continue_across_calls() {
        let mut generator = DataGenerator::new();
        let first: Vec<_> = generator.generate_posts(3).into_iter().map(|p| p.id).collect();
        let second: Vec<_> = generator.generate_posts(2).into_iter().map(|p| p.id).collect();
        assert_eq!(first, ["post_0", "post_1", "post_2"]);
        assert_eq!(second, ["post_3", "post_4"]);
    }

    #[test]
    fn generators_do_not_share_counters() {
        let mut a = DataGenerator::new();
        let mut b = DataGenerator::new();
        a.generate_posts(4);
        assert_eq!(b.generate_posts(1)[0].id, "post_0");
        assert_eq!(a.generate_products(1)[0].id, "product_0");
    }

    #[test]
    fn products_stay_within_bounds() {
        let mut generator = DataGenerator::new();
        for product in generator.generate_products(100) {
            assert!(ProductCategory::ALL.contains(&product.category));
            let rating: f64 = product.rating.parse().unwrap();
            assert!((1.0..=5.0).contains(&rating), "rating {}", product.rating);
            assert_eq!(product.rating.split('.').nth(1).map(str::len), Some(1));
            assert!((1..=1000).contains(&product.number_of_ratings));
        }
    }

    #[test]
    fn product_images_cycle_with_the_counter() {
        let mut generator = DataGenerator::new();
        let products = generator.generate_products(PRODUCT_IMAGES.len() + 2);
        for (index, product) in products.iter().enumerate() {
            assert_eq!(product.image, PRODUCT_IMAGES[index % PRODUCT_IMAGES.len()]);
        }
    }

    #[test]
    fn reviews_belong_to_their_product() {
        let mut generator = DataGenerator::new();
        let reviews = generator.generate_reviews("product_7", 10);
        assert_eq!(reviews[0].id, "review_0");
        for review in &reviews {
            assert_eq!(review.product_id, "product_7");
            assert!((1..=5).contains(&review.stars));
        }
    }

    #[test]
    fn notification_ids_are_sequential() {
        let mut generator = DataGenerator::new();
        generator.generate_notifications(2);
        let next = generator.generate_notifications(1);
        assert_eq!(next[0].id, "notification_2");
    }

    #[test]
    fn id_sequence_is_monotonic() {
        let mut seq = IdSequence::default();
        assert_eq!(seq.next_id(), 0);
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
    }
}
