//! Static fallbacks for local media paths and placeholder videos.
//!
//! Pure lookup tables: a map from known local asset paths to external URLs,
//! and a fixed rotation of sample videos.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::media::PLACEHOLDER_IMAGE_PATH;

/// Local asset path → external replacement.
pub const FALLBACK_IMAGES: &[(&str, &str)] = &[
    ("/images/cinematography-1.jpg", "https://images.unsplash.com/photo-1485846234645-a62644f84728?w=1920&h=1080"),
    ("/images/cinematography-2.jpg", "https://images.unsplash.com/photo-1604514628550-37477afdf4e3?w=1920&h=1080"),
    ("/images/cinematography-3.jpg", "https://images.unsplash.com/photo-1616530940355-351fabd9524b?w=1920&h=1080"),
    ("/images/cinematography-4.jpg", "https://images.unsplash.com/photo-1532800783378-1bed60adaf58?w=1920&h=1080"),
    ("/images/before-grade.jpg", "https://images.unsplash.com/photo-1568992687947-868a62a9f521?w=1920&h=1080&sat=-100"),
    ("/images/after-grade.jpg", "https://images.unsplash.com/photo-1568992687947-868a62a9f521?w=1920&h=1080"),
    ("/images/timeline/feature-film.jpg", "https://images.unsplash.com/photo-1500210872423-af9c2242785b?w=800&h=600"),
    ("/images/timeline/documentary.jpg", "https://images.unsplash.com/photo-1601506521793-dc748fc80b67?w=800&h=600"),
    ("/images/timeline/commercial.jpg", "https://images.unsplash.com/photo-1533928298208-27ff66555d8d?w=800&h=600"),
    ("/images/timeline/festival.jpg", "https://images.unsplash.com/photo-1594787855674-80209cb3b58a?w=800&h=600"),
    ("/images/timeline/international.jpg", "https://images.unsplash.com/photo-1473893604213-3df9c15611c0?w=800&h=600"),
    ("/images/timeline/innovation.jpg", "https://images.unsplash.com/photo-1525278070609-779c7adb7b71?w=800&h=600"),
    ("/images/testimonials/avatar-1.jpg", "https://randomuser.me/api/portraits/women/44.jpg"),
    ("/images/testimonials/avatar-2.jpg", "https://randomuser.me/api/portraits/men/32.jpg"),
    ("/images/testimonials/avatar-3.jpg", "https://randomuser.me/api/portraits/women/68.jpg"),
    ("/images/hero-poster.jpg", "https://images.unsplash.com/photo-1574267432644-f410f8ec2474?w=1920&h=1080"),
    ("/images/showreel-poster.jpg", "https://images.unsplash.com/photo-1585951237318-9ea5e175b891?w=1920&h=1080"),
    ("/images/approach-poster.jpg", "https://images.unsplash.com/photo-1496559249665-c7e2874707ea?w=1920&h=1080"),
    ("/images/profile_photo.jpeg", "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=1000&h=1500"),
    ("/images/textures/film-grain.png", "https://media.istockphoto.com/id/1278021742/vector/film-grain-texture-overlay.jpg?s=612x612&w=0&k=20&c=blDXg-9M-wQWEBCio0nQhXrUCzYGNJvow45AHb1MCgM="),
];

/// Sample videos rotated into placeholder records.
pub const PLACEHOLDER_VIDEOS: &[&str] = &[
    "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
    "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerMeltdowns.mp4",
    "https://storage.googleapis.com/gtv-videos-bucket/sample/TearsOfSteel.mp4",
];

fn is_external(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

/// External replacement for a local path.
///
/// URLs pass through untouched, as do paths with no mapping.
pub fn fallback_image(src: &str) -> &str {
    if is_external(src) {
        return src;
    }
    FALLBACK_IMAGES
        .iter()
        .find(|(path, _)| *path == src)
        .map(|(_, url)| *url)
        .unwrap_or(src)
}

/// Like [`fallback_image`], but blank input yields the placeholder path.
pub fn image_or_placeholder(src: Option<&str>) -> String {
    match src.map(str::trim) {
        Some(s) if !s.is_empty() => fallback_image(s).to_string(),
        _ => PLACEHOLDER_IMAGE_PATH.to_string(),
    }
}

pub fn random_placeholder_video<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PLACEHOLDER_VIDEOS
        .choose(rng)
        .copied()
        .unwrap_or(PLACEHOLDER_VIDEOS[0])
}

/// The record's own video if it has one, else a placeholder video.
pub fn video_or_placeholder<R: Rng + ?Sized>(url: Option<&str>, rng: &mut R) -> String {
    match url {
        Some(u) if !u.trim().is_empty() => u.to_string(),
        _ => random_placeholder_video(rng).to_string(),
    }
}
