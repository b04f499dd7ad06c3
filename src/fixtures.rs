use crate::domain::Credentials;
use fake::Fake;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::lorem::en::{Word, Words};
use fake::faker::name::en::Name;
use rand::Rng;
use secrecy::Secret;
use std::ops::Range;
use uuid::Uuid;

/// Upper bound (exclusive) for the post id pinned by the create/update/delete chain.
pub const MAX_POST_ID: u32 = 100_000;

const CONTENT_WORDS: usize = 8;
const UPDATED_CONTENT_WORDS: usize = 7;

/// Randomised input shared by every scenario of a run.
///
/// Generated once before the first scenario and only read afterwards.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub email: String,
    pub password: Secret<String>,
    pub title: String,
    pub content: String,
    pub author: String,
    pub content_updated: String,
    pub post_id: u32,
}

impl TestUser {
    pub fn generate() -> Self {
        // The tag keeps `/register` from rejecting an email left over from a previous run
        let tag = Uuid::new_v4().simple().to_string();
        let email: String = SafeEmail().fake();
        Self {
            email: format!("{}.{}", &tag[..8], email),
            password: Secret::new(Password(8..16).fake()),
            title: Word().fake(),
            content: words(CONTENT_WORDS),
            author: Name().fake(),
            content_updated: words(UPDATED_CONTENT_WORDS),
            post_id: random_post_id(0..MAX_POST_ID, &[]),
        }
    }

    /// Like [`TestUser::generate`], but the pinned `post_id` never lands on one of `excluded`.
    ///
    /// The create/update/delete chain would otherwise overwrite and then delete a seeded post.
    pub fn generate_excluding(excluded: &[u64]) -> Self {
        let mut user = Self::generate();
        user.post_id = random_post_id(0..MAX_POST_ID, excluded);
        user
    }

    pub fn credentials(&self) -> Credentials<'_> {
        Credentials {
            email: &self.email,
            password: &self.password,
        }
    }
}

fn random_post_id(range: Range<u32>, excluded: &[u64]) -> u32 {
    let mut rng = rand::thread_rng();
    loop {
        let post_id = rng.gen_range(range.clone());
        if !excluded.contains(&u64::from(post_id)) {
            return post_id;
        }
    }
}

fn words(count: usize) -> String {
    let words: Vec<String> = Words(count..count + 1).fake();
    words.join(" ")
}
