//! Exemplar field values for placeholder records.
//!
//! Generators pick entry `i % len` for record `i`, so text fields cycle
//! deterministically. Label lists (`*_CATEGORIES`, `SNIPPET_TAGS`) are sampled
//! without replacement instead.

use crate::models::{AboutPage, Award, Education, Extra};

pub const PROJECT_CATEGORIES: &[&str] = &[
    "Feature Film",
    "Commercial",
    "Music Video",
    "Short Film",
    "Documentary",
];

pub const PROJECT_DESCRIPTION: &str = "This is a placeholder project description. In a real project, this would contain details about the cinematography work.";

/// Queries used to fill the gallery, one batch each.
pub const GALLERY_QUERIES: &[&str] = &["cinematography", "filmmaking", "movie production"];

pub const SHOWREEL_TITLE: &str = "Cinematography Showreel";
pub const SHOWREEL_DESCRIPTION: &str = "A collection of my best cinematography work";

pub const WORKSHOP_LOCATIONS: &[&str] = &[
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Atlanta, GA",
    "Austin, TX",
];

pub const WORKSHOP_LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced", "Master Class"];

pub const WORKSHOP_DESCRIPTION: &str = "Learn essential cinematography techniques in this hands-on workshop. Perfect for filmmakers looking to elevate their visual storytelling.";
pub const WORKSHOP_CURRICULUM: &str =
    "Lighting techniques, Camera movement, Visual storytelling, Color theory";
pub const WORKSHOP_INSTRUCTOR: &str = "Professional Cinematographer";

pub const POST_TITLES: &[&str] = &[
    "The Art of Natural Light in Cinematography",
    "Creating Mood with Camera Movement",
    "Understanding Color Grading for Emotional Impact",
    "Lens Selection for Different Narrative Styles",
    "Mastering the Art of Visual Composition",
    "Practical Lighting Techniques for Indie Filmmakers",
];

pub const POST_EXCERPTS: &[&str] = &[
    "Discover how to harness natural light to create stunning cinematic imagery without expensive lighting setups.",
    "Learn how different camera movements can enhance storytelling and create emotional connections with your audience.",
    "Explore the psychological impact of color choices in your cinematography and how to use grading effectively.",
    "A comprehensive guide to selecting the right lens for your project based on the emotional response you want to create.",
    "Understanding the rules of composition and when to break them for maximum visual impact.",
    "Budget-friendly lighting solutions that still deliver professional-quality results for independent productions.",
];

pub const POST_CATEGORIES: &[&str] = &[
    "Techniques",
    "Equipment",
    "Tutorials",
    "Industry Insights",
    "Behind the Scenes",
];

pub const EVENT_TITLES: &[&str] = &[
    "Film Festival Screening: \"Through the Lens\"",
    "Masterclass: Cinematic Lighting",
    "Panel Discussion: Evolution of Visual Storytelling",
    "Workshop: Camera Movement Techniques",
    "Exhibition: Frames from the Field",
    "Q&A Session with Industry Professionals",
    "Premiere: \"Shadows and Light\" Documentary",
    "Networking Event: Cinematographers Collective",
];

pub const EVENT_LOCATIONS: &[&str] = &[
    "Film Society, New York",
    "Cinematheque, Los Angeles",
    "Media Arts Center, Chicago",
    "Film Academy, London",
    "Arts District Gallery, Berlin",
    "Creative Hub, Tokyo",
];

pub const EVENT_DESCRIPTIONS: &[&str] = &[
    "Join us for an exclusive screening followed by a discussion on the cinematography techniques used in this award-winning film.",
    "A deep dive into the art of visual storytelling through the lens of contemporary cinema.",
    "Explore innovative camera techniques and their impact on modern filmmaking in this interactive session.",
    "An immersive exhibition showcasing striking cinematography from various genres and styles.",
    "Connect with fellow filmmakers and cinematography enthusiasts in this casual networking event.",
];

pub const EVENT_TICKET_LINK: &str = "https://example.com/tickets";

pub const EXPERIMENT_TITLES: &[&str] = &[
    "Light Painting in Motion",
    "Anamorphic Lens Distortion Study",
    "Infrared Cinematography",
    "Liquid Lensing Effects",
    "Practical In-Camera VFX",
    "Mirrors and Projections",
];

pub const EXPERIMENT_TECHNIQUES: &[&str] = &[
    "Long Exposure",
    "Custom Lens Modding",
    "IR-Converted Cameras",
    "Projection Mapping",
    "Light Refraction",
    "Macro Cinematography",
];

pub const EXPERIMENT_EQUIPMENT: &[&str] = &[
    "RED Gemini, Vintage Anamorphic Lenses",
    "ARRI Alexa Mini, Custom Lens Attachments",
    "Blackmagic URSA Mini Pro, IR Conversion",
    "Sony Venice, Projectors, Mirrors",
    "Custom Rig, Practical Lighting Elements",
];

pub const EXPERIMENT_DESCRIPTIONS: &[&str] = &[
    "Exploring the boundaries between still photography and motion pictures through extended exposure cinematography.",
    "A technical exploration of optical distortion and its storytelling applications in narrative filmmaking.",
    "Capturing the invisible spectrum to create otherworldly visuals for a sci-fi short film.",
    "Using liquids, glass, and light to create in-camera effects that distort and enhance the image in unexpected ways.",
];

pub const EXPERIMENT_FULL_DESCRIPTIONS: &[&str] = &[
    "This experimental project aimed to translate the technique of light painting from photography into the realm of cinematography. By using carefully choreographed light movements captured with extended exposures at varying frame rates, we created fluid, ethereal light trails that interact with our subjects in three-dimensional space. The technique allows for a unique visualization of time and movement that challenges traditional cinematography approaches.",
    "In this technical study, we pushed anamorphic lenses to their optical limits to discover unique visual characteristics. By deliberately exploiting lens flares, distortions, and bokeh, we created a visual language that enhances storytelling through optical imperfection. The experiment included testing vintage lenses, custom lens modifications, and various filtering techniques to create a library of distinctive looks.",
    "Converting a digital cinema camera to capture infrared light opened up a new visual spectrum that transforms familiar landscapes and skin tones into surreal, dreamlike imagery. This experiment explored how infrared cinematography can be used for narrative purposes, particularly in scenes depicting memory, altered states of consciousness, or otherworldly environments.",
    "This project investigated how liquids, crystals, and glass elements can be used as optical filters to distort and manipulate light before it reaches the sensor. By building a custom rig that holds these elements between the lens and subject, we achieved practical in-camera effects that would be difficult to replicate digitally, resulting in organic, unrepeatable visual moments.",
];

pub const EXPERIMENT_OUTCOMES: &[&str] = &[
    "The techniques developed in this experiment were later applied to a music video that won recognition for its innovative visual approach. We discovered that timing and precision were crucial, requiring extensive rehearsal with performers.",
    "This study resulted in a comprehensive look book that has informed the visual approach for an upcoming feature film. The distinctive characteristics of each lens/modification combination were documented for future creative reference.",
    "The infrared footage captured during this experiment created such a distinctive look that it has been incorporated into a sci-fi short film currently in post-production. The technique proved particularly effective for dream sequences.",
    "While challenging to control with precision, the organic nature of these liquid lens effects created visual moments impossible to achieve digitally. The unpredictability became part of the creative process, leading to happy accidents and unique imagery.",
];

pub const EXPERIMENT_COLLABORATORS: &str = "Jane Smith (Director), Alex Wong (Production Design)";

pub const PREVIEW_CLIENTS: &[&str] = &[
    "Acme Productions",
    "Westlight Studios",
    "Horizon Films",
    "Elevate Media",
];

pub const PREVIEW_TITLES: &[&str] = &[
    "Commercial Spot - First Cut",
    "Documentary Trailer - WIP",
    "Brand Film - Color Grade Preview",
    "Feature Film Scene - Lighting Test",
];

pub const PREVIEW_DESCRIPTIONS: &[&str] = &[
    "First cut of the upcoming commercial. Please focus feedback on pacing and shot selection.",
    "Work-in-progress trailer for the documentary. Looking for input on narrative structure and emotional impact.",
    "Preview of the color grade for brand film. Aiming for a warm, nostalgic look while maintaining brand colors.",
    "Lighting test for the key emotional scene. Attempting to create dramatic tension while maintaining natural feel.",
];

pub const PREVIEW_PASSWORD: &str = "preview123";

pub const SNIPPET_TITLES: &[&str] = &[
    "Orbit Camera Movement",
    "Silhouette Lighting Setup",
    "Anamorphic Lens Flare Technique",
    "Dolly Zoom Effect",
    "Split Diopter Focus",
    "Low-Key Lighting Study",
    "Day for Night Color Grading",
    "Portrait Lighting Setup",
    "Handheld Camera Stabilization",
];

pub const SNIPPET_DESCRIPTIONS: &[&str] = &[
    "Demonstration of smooth orbital camera movement around a subject using a gimbal.",
    "Creating dramatic silhouettes with a single backlight and haze.",
    "How to achieve and control those distinctive horizontal lens flares.",
    "The Vertigo effect - pushing in while zooming out for psychological impact.",
    "Getting two subjects at different distances both in focus simultaneously.",
    "Creating mood and shadow with minimal lighting setup.",
    "Techniques for shooting daytime footage that convincingly looks like night.",
    "Classic three-point lighting setup for interview situations.",
    "Techniques for stable handheld camera operation without equipment.",
];

pub const SNIPPET_TECHNIQUES: &[&str] = &[
    "Camera Movement",
    "Lighting",
    "Lens Technique",
    "Special Effect",
    "Focus Technique",
    "Mood Lighting",
    "Color Grading",
    "Interview Lighting",
    "Camera Operation",
];

pub const SNIPPET_TAGS: &[&str] = &[
    "Lighting",
    "Movement",
    "Composition",
    "Technical",
    "Tutorial",
    "Lenses",
    "Color",
    "Practical Effect",
    "Low Budget",
    "Advanced",
];

pub const TESTIMONIAL_QUOTES: &[&str] = &[
    "Working with this cinematographer was a revelation. The way they captured light transformed our simple story into visual poetry.",
    "The attention to detail and technical expertise brought to our project elevated the entire production. Every frame is a work of art.",
    "A true visual storyteller who understands that cinematography isn't just about beautiful images. It's about serving the narrative with every shot.",
    "Collaborative, creative, and technically flawless. Our film wouldn't have achieved the same emotional resonance without their distinctive visual approach.",
    "The ability to work within our budget constraints while still delivering stunning imagery speaks to both their creativity and professionalism.",
    "From pre-production planning to the final color grade, the level of thoughtfulness and artistic vision was exceptional.",
];

pub const TESTIMONIAL_AUTHORS: &[&str] = &[
    "Sarah Johnson",
    "Michael Chen",
    "Priya Patel",
    "David Rodriguez",
    "Emma Thompson",
    "James Wilson",
];

pub const TESTIMONIAL_ROLES: &[&str] = &[
    "Film Director",
    "Executive Producer",
    "Commercial Client",
    "Music Video Artist",
    "Creative Director",
    "Documentary Filmmaker",
];

pub const TESTIMONIAL_PROJECTS: &[&str] = &[
    "The Silent Hour",
    "Brand Campaign: Revitalize",
    "Echoes of Tomorrow",
    "Urban Symphony Music Video",
    "The Crossing Documentary",
    "Visionary Light Campaign",
];

const ABOUT_BIOGRAPHY: &str = "With over a decade of experience in visual storytelling, I've developed an aesthetic that blends technical precision with emotional resonance. My work spans feature films, documentaries, commercials, and experimental projects, each approached with the same commitment to visual excellence. My journey began at Film Academy Vienna, where I honed my craft under the mentorship of award-winning cinematographers. Since then, I've collaborated with directors across the globe, developing a versatile style that adapts to each project's unique vision while maintaining my distinct visual signature.";

const ABOUT_PHILOSOPHY: &str = "I believe cinematography is the delicate balance between technical mastery and artistic intuition. My approach centers on finding the visual language that best serves the story, whether that means breathtaking camera movement, nuanced lighting, or the subtle power of a static frame. Every decision, from lens selection to color palette, is made in service of the narrative.";

const ABOUT_SKILLS: &[&str] = &[
    "Advanced lighting techniques for diverse environments",
    "Experienced with ARRI, RED, and Sony cinema camera systems",
    "Color theory and practical application in cinematography",
    "Technical and creative lens selection for narrative impact",
    "Aerial cinematography and complex camera movement",
    "Virtual production and LED volume experience",
];

/// `(institution, degree, year)`
const ABOUT_EDUCATION: &[(&str, &str, &str)] = &[
    ("Film Academy Vienna", "MFA in Cinematography", "2012"),
    ("American Film Institute", "Cinematography Intensive Program", "2010"),
    ("University of Arts London", "BA in Photography and Visual Arts", "2008"),
];

/// `(title, project, year, festival)`
const ABOUT_AWARDS: &[(&str, &str, &str, Option<&str>)] = &[
    ("Golden Camera Award", "The Quiet Hour", "2022", None),
    ("Best Cinematography", "Shadows of the Past", "2020", Some("International Film Festival")),
    ("Visual Excellence Award", "Urban Reflections", "2019", Some("Documentary Film Association")),
];

/// Entry `index` of `list`, cycling.
pub fn cycle<'a>(list: &[&'a str], index: usize) -> &'a str {
    list[index % list.len()]
}

pub fn about_page() -> AboutPage {
    AboutPage {
        biography: Some(ABOUT_BIOGRAPHY.to_string()),
        philosophy: Some(ABOUT_PHILOSOPHY.to_string()),
        skills: ABOUT_SKILLS.iter().map(|s| s.to_string()).collect(),
        education: ABOUT_EDUCATION
            .iter()
            .map(|(institution, degree, year)| Education {
                institution: institution.to_string(),
                degree: degree.to_string(),
                year: year.to_string(),
            })
            .collect(),
        awards: ABOUT_AWARDS
            .iter()
            .map(|(title, project, year, festival)| Award {
                title: title.to_string(),
                project: project.to_string(),
                year: year.to_string(),
                festival: festival.map(str::to_string),
            })
            .collect(),
        profile_image: Default::default(),
        extra: Extra::new(),
    }
}
