use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{InvalidConfigurationError, Suggestion};

pub const ART_STYLES: [&str; 4] = ["anime", "art nouveau", "ukiyo-e", "watercolor"];

/// How many chips the prompt bar shows at a time.
pub const SUGGESTION_COUNT: usize = 5;

fn suggestion(text: &str, prompt: &str) -> Suggestion {
    Suggestion {
        text: text.to_string(),
        prompt: prompt.to_string(),
    }
}

pub fn base_prompts() -> Vec<Suggestion> {
    vec![
        suggestion("Salamander Dusk", "A salamander at dusk in a forest pond"),
        suggestion(
            "Sultry Chicken",
            "A sultry chicken peering around the corner from shadows, clearly up to no good",
        ),
        suggestion("Cat Launch", "A cat triumphantly launching its own website"),
        suggestion(
            "Red Panda",
            "A red panda sipping tea under cherry blossoms at sunset with Mount Fuji in the background",
        ),
        suggestion(
            "Beach Otter",
            "A mischievous otter surfing the waves in Bali at golden hour",
        ),
        suggestion(
            "Badger Ramen",
            "A pensive honey badger eating a bowl of ramen in Osaka",
        ),
        suggestion(
            "Zen Frog",
            "A frog meditating on a lotus leaf in a tranquil forest pond at dawn, surrounded by fireflies",
        ),
        suggestion(
            "Macaw Love",
            "A colorful macaw delivering a love letter, flying over the Grand Canyon at sunrise",
        ),
        suggestion(
            "Fox Painting",
            "A fox walking through a field of lavender with a golden sunset",
        ),
        suggestion(
            "Armadillo Aerospace",
            "An armadillo in a rocket at countdown preparing to blast off to Mars",
        ),
        suggestion(
            "Penguin Delight",
            "A penguin in pajamas eating ice cream while watching television",
        ),
        suggestion(
            "Echidna Library",
            "An echidna reading a book in a cozy library built into the branches of a eucalyptus tree",
        ),
        suggestion(
            "Capybara Onsen",
            "A capybara relaxing in a hot spring surrounded by snow-covered mountains with a waterfall in the background",
        ),
        suggestion(
            "Lion Throne",
            "A regal lion wearing a crown, sitting on a throne in a jungle palace, with waterfalls in the distance",
        ),
        suggestion(
            "Dolphin Glow",
            "A dolphin leaping through a glowing ring of bioluminescence under a starry sky",
        ),
        suggestion(
            "Owl Detective",
            "An owl wearing a monocle and top hat, solving a mystery in a misty forest at midnight",
        ),
        suggestion(
            "Jellyfish Cathedral",
            "A jellyfish floating gracefully in an underwater cathedral made of coral and glass",
        ),
        suggestion(
            "Platypus River",
            "A platypus foraging in a river with a sunset in the background",
        ),
        suggestion(
            "Chameleon Urban",
            "A chameleon blending into a graffiti-covered wall in an urban jungle",
        ),
        suggestion(
            "Tortoise Oasis",
            "A giant tortoise slowly meandering its way to an oasis in the desert",
        ),
        suggestion(
            "Hummingbird Morning",
            "A hummingbird sipping nectar from a purple bougainvillea at sunrise, captured mid-flight",
        ),
        suggestion(
            "Polar Bear",
            "A polar bear clambering onto an iceberg to greet a friendly harbor seal as dusk falls",
        ),
        suggestion(
            "Lemur Sunbathing",
            "A ring-tailed lemur sunbathing on a rock in Madagascar in early morning light",
        ),
    ]
}

/// Picks `count` random base prompts and appends a random art style to each
/// underlying prompt, leaving display text alone. Pure given the rng; the
/// inputs are shuffled on copies and never mutated. The output order carries
/// no meaning beyond the permutation.
pub fn styled_suggestions(
    base: &[Suggestion],
    styles: &[&str],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Suggestion>, InvalidConfigurationError> {
    if styles.is_empty() {
        return Err(InvalidConfigurationError {
            reason: "style tag list is empty",
        });
    }

    let mut shuffled_prompts = base.to_vec();
    shuffled_prompts.shuffle(rng);
    let mut shuffled_styles = styles.to_vec();
    shuffled_styles.shuffle(rng);

    Ok(shuffled_prompts
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(index, item)| Suggestion {
            text: item.text,
            prompt: format!(
                "{}, in the style of {}",
                item.prompt,
                shuffled_styles[index % shuffled_styles.len()]
            ),
        })
        .collect())
}
