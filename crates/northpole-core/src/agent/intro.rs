//! Typed greeting shown when a conversation starts.
//!
//! A greeting is picked at random from [`INTRO_CATALOG`] and revealed one
//! word at a time: element *n* of the stream is the first *n* words joined
//! by single spaces, and each element is followed by a fixed delay.

use std::pin::Pin;
use std::time::Duration;

use futures_util::Stream;
use rand::seq::IndexedRandom;

/// Default pause between revealed words.
pub const DEFAULT_TYPING_DELAY: Duration = Duration::from_millis(50);

/// Candidate greetings.
pub const INTRO_CATALOG: &[&str] = &[
    "Ho, ho, ho! Hello, little one! How are you today? Excited for Christmas?",
    "Jingle bells, jingle bells! Tell me! Have you been nice this years?",
    "Ho, ho! It's freezing out here! Quick! Tell me what you want for Christmas, before I turn into an ice cream!",
    "Hmm hmmm... Look who's here... Hello, you! Would you like to tell Santa something?",
    "Ho, ho, ho! A penguin just ate my lunch-ho! And you, little one, how are you today?",
    "Hello my dear! Christmas is near, I hope you've been nice this year... Have you?",
    "Jingle bells! It's-a-me, Santa Claus from Kentucky! Yeeeeee-haa!",
    "Happy halloween!... Uh-oh. Wrong holidays! Ho, ho, ho! Merry Christmas, how are you?",
];

/// Lazily revealed greeting prefixes.
pub type IntroStream = Pin<Box<dyn Stream<Item = String> + Send + 'static>>;

/// Pick one greeting uniformly at random.
pub fn choose_intro() -> &'static str {
    INTRO_CATALOG
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(INTRO_CATALOG[0])
}

/// Reveal `greeting` word by word with `delay` after each step.
pub fn intro_from(greeting: &str, delay: Duration) -> IntroStream {
    let words: Vec<String> = greeting.split(' ').map(str::to_string).collect();
    Box::pin(async_stream::stream! {
        for n in 1..=words.len() {
            yield words[..n].join(" ");
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    })
}
