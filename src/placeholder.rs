//! Placeholder generators, one per content type.
//!
//! Every generator returns exactly `count` records with identifiers
//! `placeholder-<namespace>-<i>` for `i` in `0..count`. Text fields cycle
//! through [`templates`](crate::templates) by index; numbers and dates come
//! from the supplied random source and are placed relative to `now`.
//!
//! Generators are synchronous. Image pre-fetching happens in the resolver,
//! which hands the results to [`projects`] and [`gallery_images`].

use chrono::{DateTime, Datelike, Duration, Months, NaiveTime, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::fallback::random_placeholder_video;
use crate::kinds::{placeholder_id, ContentKind};
use crate::media::MediaDescriptor;
use crate::models::{
    AboutPage, BlogPost, Category, Event, Experiment, Extra, GalleryImage, Preview, Project,
    Showreel, Slug, Snippet, Testimonial, Workshop, PLACEHOLDER_PREFIX,
};
use crate::templates::{self, cycle};
use crate::unsplash::{random_placeholder_image, UnsplashImage};

/// Between `min` and `max` distinct labels, sampled without replacement.
pub fn sample_labels<R: Rng + ?Sized>(
    labels: &[&str],
    min: usize,
    max: usize,
    rng: &mut R,
) -> Vec<String> {
    let n = rng.gen_range(min..=max).min(labels.len());
    labels
        .choose_multiple(rng, n)
        .map(|s| s.to_string())
        .collect()
}

/// Midnight on the first of the month, `months_back` months before `now`.
fn month_start_before(now: DateTime<Utc>, months_back: u32) -> DateTime<Utc> {
    let today = now.date_naive();
    let first = today.with_day(1).unwrap_or(today);
    let date = first
        .checked_sub_months(Months::new(months_back))
        .unwrap_or(first);
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

fn months_after(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_add_months(Months::new(months))
        .unwrap_or_else(|| now + Duration::days(30 * months as i64))
}

fn image_at<R: Rng + ?Sized>(images: &[UnsplashImage], index: usize, rng: &mut R) -> MediaDescriptor {
    match images.get(index % images.len().max(1)) {
        Some(image) => MediaDescriptor::external(image.regular.clone()),
        None => MediaDescriptor::external(random_placeholder_image(rng)),
    }
}

/// Projects dated on consecutive past months, newest first. The first two
/// are featured.
pub fn projects<R: Rng + ?Sized>(
    count: usize,
    images: &[UnsplashImage],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Project> {
    (0..count)
        .map(|i| Project {
            id: placeholder_id(ContentKind::Project, i),
            title: format!("Project {}", i + 1),
            description: Some(templates::PROJECT_DESCRIPTION.to_string()),
            slug: Some(Slug::new(format!("project-{}", i + 1))),
            main_image: image_at(images, i, rng),
            categories: sample_labels(templates::PROJECT_CATEGORIES, 1, 3, rng),
            video_url: Some(random_placeholder_video(rng).to_string()),
            featured: i < 2,
            date: Some(month_start_before(now, i as u32 + 1)),
            extra: Extra::new(),
        })
        .collect()
}

pub fn showreel<R: Rng + ?Sized>(rng: &mut R) -> Showreel {
    Showreel {
        id: format!("{}showreel", PLACEHOLDER_PREFIX),
        title: templates::SHOWREEL_TITLE.to_string(),
        description: Some(templates::SHOWREEL_DESCRIPTION.to_string()),
        video_url: Some(random_placeholder_video(rng).to_string()),
        extra: Extra::new(),
    }
}

/// Gallery entries cycling through `images`; with no images each entry
/// points at the static placeholder.
pub fn gallery_images(count: usize, images: &[UnsplashImage]) -> Vec<GalleryImage> {
    (0..count)
        .map(|i| GalleryImage {
            id: placeholder_id(ContentKind::GalleryImage, i),
            title: format!("Gallery Image {}", i + 1),
            image: match images.get(i % images.len().max(1)) {
                Some(image) => MediaDescriptor::external(image.regular.clone()),
                None => MediaDescriptor::Absent,
            },
            description: Some(format!("Placeholder image description {}", i + 1)),
            extra: Extra::new(),
        })
        .collect()
}

/// Upcoming workshops starting 1–6 months out and lasting 1–5 days.
pub fn workshops<R: Rng + ?Sized>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<Workshop> {
    (0..count)
        .map(|i| {
            let start = months_after(now, rng.gen_range(1..=6));
            let end = start + Duration::days(rng.gen_range(1..=5));
            let seats = rng.gen_range(10..30);
            let level = cycle(templates::WORKSHOP_LEVELS, i);
            Workshop {
                id: placeholder_id(ContentKind::Workshop, i),
                title: format!("Cinematography {} Workshop", level),
                description: Some(templates::WORKSHOP_DESCRIPTION.to_string()),
                start_date: Some(start),
                end_date: Some(end),
                location: Some(cycle(templates::WORKSHOP_LOCATIONS, i).to_string()),
                image: MediaDescriptor::Absent,
                price: Some(rng.gen_range(500..2000) as f64),
                seats,
                seats_available: rng.gen_range(0..=seats),
                curriculum: Some(templates::WORKSHOP_CURRICULUM.to_string()),
                instructor: Some(templates::WORKSHOP_INSTRUCTOR.to_string()),
                level: Some(level.to_string()),
                extra: Extra::new(),
            }
        })
        .collect()
}

/// Posts spread over the past six months, newest first.
pub fn blog_posts<R: Rng + ?Sized>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<BlogPost> {
    let span_days = (now - months_before(now, 6)).num_days().max(1);
    (0..count)
        .map(|i| {
            let title = cycle(templates::POST_TITLES, i);
            let days_ago = 1 + (i as i64 * span_days) / count as i64;
            BlogPost {
                id: placeholder_id(ContentKind::BlogPost, i),
                title: title.to_string(),
                slug: Some(Slug::from_title(title)),
                main_image: MediaDescriptor::Absent,
                published_at: Some(now - Duration::days(days_ago)),
                categories: sample_labels(templates::POST_CATEGORIES, 1, 3, rng)
                    .into_iter()
                    .map(|title| Category { title })
                    .collect(),
                excerpt: Some(cycle(templates::POST_EXCERPTS, i).to_string()),
                estimated_reading_time: Some(rng.gen_range(3..=12)),
                extra: Extra::new(),
            }
        })
        .collect()
}

fn months_before(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or_else(|| now - Duration::days(30 * months as i64))
}

/// The first half (rounded up) is upcoming, 1–180 days ahead with a ticket
/// link; the rest happened 1–180 days ago.
pub fn events<R: Rng + ?Sized>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<Event> {
    (0..count)
        .map(|i| {
            let upcoming = 2 * i < count;
            let offset = Duration::days(rng.gen_range(1..=180));
            let date = if upcoming { now + offset } else { now - offset };
            Event {
                id: placeholder_id(ContentKind::Event, i),
                title: cycle(templates::EVENT_TITLES, i).to_string(),
                description: Some(cycle(templates::EVENT_DESCRIPTIONS, i).to_string()),
                event_date: Some(date),
                end_date: Some(date + Duration::days(rng.gen_range(0..=3))),
                location: Some(cycle(templates::EVENT_LOCATIONS, i).to_string()),
                image: MediaDescriptor::Absent,
                ticket_link: upcoming.then(|| templates::EVENT_TICKET_LINK.to_string()),
                featured: i < 2,
                extra: Extra::new(),
            }
        })
        .collect()
}

/// `"a, b"` as `["a", "b"]`.
fn split_list(joined: &str) -> Vec<String> {
    joined.split(", ").map(str::to_string).collect()
}

/// Experiments dated within the past two years.
pub fn experiments<R: Rng + ?Sized>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<Experiment> {
    (0..count)
        .map(|i| Experiment {
            id: placeholder_id(ContentKind::Experiment, i),
            title: cycle(templates::EXPERIMENT_TITLES, i).to_string(),
            description: Some(cycle(templates::EXPERIMENT_DESCRIPTIONS, i).to_string()),
            full_description: Some(cycle(templates::EXPERIMENT_FULL_DESCRIPTIONS, i).to_string()),
            video_url: Some(random_placeholder_video(rng).to_string()),
            date: Some(now - Duration::days(rng.gen_range(1..=730))),
            equipment: split_list(cycle(templates::EXPERIMENT_EQUIPMENT, i)),
            technique: Some(cycle(templates::EXPERIMENT_TECHNIQUES, i).to_string()),
            collaborators: split_list(templates::EXPERIMENT_COLLABORATORS),
            images: Vec::new(),
            outcome: Some(cycle(templates::EXPERIMENT_OUTCOMES, i).to_string()),
            main_image: MediaDescriptor::Absent,
            extra: Extra::new(),
        })
        .collect()
}

/// Client previews created within the last 30 days and expiring within
/// the next 14.
pub fn previews<R: Rng + ?Sized>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<Preview> {
    (0..count)
        .map(|i| Preview {
            id: placeholder_id(ContentKind::Preview, i),
            title: cycle(templates::PREVIEW_TITLES, i).to_string(),
            description: Some(cycle(templates::PREVIEW_DESCRIPTIONS, i).to_string()),
            video_url: Some(random_placeholder_video(rng).to_string()),
            client_name: Some(cycle(templates::PREVIEW_CLIENTS, i).to_string()),
            created_at: Some(now - Duration::days(rng.gen_range(0..30))),
            expiry_date: Some(now + Duration::days(rng.gen_range(1..=14))),
            password: Some(templates::PREVIEW_PASSWORD.to_string()),
            feedback_enabled: true,
            thumbnail_image: MediaDescriptor::Absent,
            extra: Extra::new(),
        })
        .collect()
}

pub fn snippets<R: Rng + ?Sized>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<Snippet> {
    (0..count)
        .map(|i| Snippet {
            id: placeholder_id(ContentKind::Snippet, i),
            title: cycle(templates::SNIPPET_TITLES, i).to_string(),
            description: Some(cycle(templates::SNIPPET_DESCRIPTIONS, i).to_string()),
            video_url: Some(random_placeholder_video(rng).to_string()),
            thumbnail: MediaDescriptor::Absent,
            tags: sample_labels(templates::SNIPPET_TAGS, 2, 4, rng),
            duration: Some(rng.gen_range(30..180)),
            published_at: Some(now - Duration::days(rng.gen_range(0..90))),
            technique: Some(cycle(templates::SNIPPET_TECHNIQUES, i).to_string()),
            extra: Extra::new(),
        })
        .collect()
}

pub fn testimonials<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Testimonial> {
    (0..count)
        .map(|i| Testimonial {
            id: placeholder_id(ContentKind::Testimonial, i),
            quote: cycle(templates::TESTIMONIAL_QUOTES, i).to_string(),
            author: cycle(templates::TESTIMONIAL_AUTHORS, i).to_string(),
            role: Some(cycle(templates::TESTIMONIAL_ROLES, i).to_string()),
            project: Some(cycle(templates::TESTIMONIAL_PROJECTS, i).to_string()),
            rating: Some(rng.gen_range(4..=5)),
            extra: Extra::new(),
        })
        .collect()
}

pub fn about_page() -> AboutPage {
    templates::about_page()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{partition_by_date, ContentItem};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC1AE)
    }

    fn assert_ids<T: ContentItem>(items: &[T], namespace: &str, count: usize) {
        assert_eq!(items.len(), count);
        let ids: HashSet<&str> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), count, "ids must be unique");
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.id(), format!("placeholder-{}-{}", namespace, i));
            assert!(item.is_placeholder());
        }
    }

    #[test]
    fn test_workshops_bounds() {
        let now = Utc::now();
        let items = workshops(5, now, &mut rng());
        assert_ids(&items, "workshop", 5);
        for w in &items {
            let price = w.price.unwrap();
            assert!((500.0..=2000.0).contains(&price), "price {}", price);
            assert!((10..30).contains(&w.seats));
            assert!(w.seats_available <= w.seats);
            assert!(w.enrolled() <= w.seats);
            assert!(w.is_upcoming(now));
            assert!(w.end_date.unwrap() > w.start_date.unwrap());
        }
        assert_eq!(items[0].level.as_deref(), Some("Beginner"));
        assert_eq!(items[4].level.as_deref(), Some("Beginner"));
        assert_eq!(items[3].title, "Cinematography Master Class Workshop");
    }

    #[test]
    fn test_events_partition() {
        let now = Utc::now();
        for count in [1, 5, 6, 11] {
            let items = events(count, now, &mut rng());
            assert_ids(&items, "event", count);
            let (upcoming, past) = partition_by_date(&items, now);
            assert_eq!(upcoming.len() + past.len(), count);
            assert_eq!(upcoming.len(), count.div_ceil(2));
            assert!(upcoming.iter().all(|e| e.ticket_link.is_some()));
            assert!(past.iter().all(|e| e.ticket_link.is_none()));
        }
    }

    #[test]
    fn test_events_end_not_before_start() {
        let items = events(8, Utc::now(), &mut rng());
        for e in items {
            assert!(e.end_date.unwrap() >= e.event_date.unwrap());
        }
    }

    #[test]
    fn test_text_fields_cycle_deterministically() {
        let now = Utc::now();
        let a = blog_posts(8, now, &mut StdRng::seed_from_u64(1));
        let b = blog_posts(8, now, &mut StdRng::seed_from_u64(2));
        let titles = |v: &Vec<BlogPost>| v.iter().map(|p| p.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&a), titles(&b));
        assert_eq!(a[6].title, a[0].title);
        assert_eq!(a[0].slug.as_ref().unwrap().current, "the-art-of-natural-light-in-cinematography");
    }

    #[test]
    fn test_same_seed_same_output() {
        let now = Utc::now();
        assert_eq!(snippets(9, now, &mut rng()), snippets(9, now, &mut rng()));
    }

    #[test]
    fn test_blog_posts_in_past_six_months() {
        let now = Utc::now();
        let posts = blog_posts(6, now, &mut rng());
        assert_ids(&posts, "post", 6);
        let floor = now - Duration::days(190);
        for p in &posts {
            let d = p.published_at.unwrap();
            assert!(d < now && d > floor);
            assert!((1..=3).contains(&p.categories.len()));
            assert!((3..=12).contains(&p.estimated_reading_time.unwrap()));
        }
        assert!(posts.windows(2).all(|w| w[0].published_at >= w[1].published_at));
    }

    #[test]
    fn test_sample_labels_distinct() {
        let mut r = rng();
        for _ in 0..50 {
            let labels = sample_labels(templates::SNIPPET_TAGS, 2, 4, &mut r);
            assert!((2..=4).contains(&labels.len()));
            let unique: HashSet<_> = labels.iter().collect();
            assert_eq!(unique.len(), labels.len());
        }
    }

    #[test]
    fn test_sample_labels_capped_by_list() {
        let labels = sample_labels(&["a", "b"], 1, 3, &mut rng());
        assert!(labels.len() <= 2);
    }

    #[test]
    fn test_projects_use_images_cyclically() {
        let images: Vec<UnsplashImage> = (0..2)
            .map(|i| UnsplashImage {
                regular: format!("https://img/{}", i),
                small: String::new(),
                thumb: String::new(),
                alt: None,
                credit: None,
            })
            .collect();
        let now = Utc::now();
        let items = projects(5, &images, now, &mut rng());
        assert_ids(&items, "project", 5);
        assert_eq!(items[2].main_image, MediaDescriptor::external("https://img/0"));
        assert_eq!(items.iter().filter(|p| p.featured).count(), 2);
        assert!(items.iter().all(|p| p.date.unwrap() < now));
        assert!(items.windows(2).all(|w| w[0].date > w[1].date));
        assert!(items.iter().all(|p| p.video_url.is_some()));
    }

    #[test]
    fn test_projects_without_images() {
        let items = projects(3, &[], Utc::now(), &mut rng());
        for p in items {
            assert!(matches!(p.main_image, MediaDescriptor::External { .. }));
        }
    }

    #[test]
    fn test_gallery_without_images_absent() {
        let items = gallery_images(4, &[]);
        assert_ids(&items, "gallery", 4);
        assert!(items.iter().all(|g| g.image.is_absent()));
    }

    #[test]
    fn test_previews_window() {
        let now = Utc::now();
        let items = previews(3, now, &mut rng());
        assert_ids(&items, "preview", 3);
        for p in items {
            assert!(!p.is_expired(now));
            assert!(p.created_at.unwrap() <= now);
            assert!(p.is_protected());
        }
    }

    #[test]
    fn test_experiments_in_past() {
        let now = Utc::now();
        let items = experiments(4, now, &mut rng());
        assert_ids(&items, "experiment", 4);
        let floor = now - Duration::days(731);
        assert!(items.iter().all(|e| {
            let d = e.date.unwrap();
            d < now && d > floor
        }));
    }

    #[test]
    fn test_testimonial_ratings() {
        let items = testimonials(6, &mut rng());
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|t| matches!(t.rating, Some(4) | Some(5))));
        assert_eq!(items[1].author, "Michael Chen");
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(workshops(0, Utc::now(), &mut rng()).is_empty());
        assert!(blog_posts(0, Utc::now(), &mut rng()).is_empty());
    }

    #[test]
    fn test_month_start_before() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 15, 0, 0).unwrap();
        assert_eq!(
            month_start_before(now, 1),
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            month_start_before(now, 3),
            Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap()
        );
    }
}
