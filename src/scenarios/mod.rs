mod auth;
mod read;
mod write;

use crate::api_client::PostsApiClient;
use crate::configuration::SuiteSettings;
use crate::error::ScenarioError;
use crate::fixtures::TestUser;

/// Everything a scenario may touch. Built once per run and only borrowed afterwards.
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    pub client: PostsApiClient,
    pub user: TestUser,
    pub suite: SuiteSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    ListAllPosts,
    PaginatedList,
    GetById,
    UnauthorizedCreate,
    AuthenticatedCreate,
    PublicCreate,
    UpdateNonExisting,
    CreateThenUpdate,
    DeleteNonExisting,
    DeleteThenVerifyGone,
}

#[derive(thiserror::Error, Debug)]
#[error("`{0}` is not a known scenario")]
pub struct UnknownScenario(pub String);

impl Scenario {
    /// Canonical execution order.
    ///
    /// `UpdateNonExisting` must run before `CreateThenUpdate` creates the
    /// pinned post, and `DeleteThenVerifyGone` removes that same post last.
    pub const ALL: [Scenario; 10] = [
        Scenario::ListAllPosts,
        Scenario::PaginatedList,
        Scenario::GetById,
        Scenario::UnauthorizedCreate,
        Scenario::AuthenticatedCreate,
        Scenario::PublicCreate,
        Scenario::UpdateNonExisting,
        Scenario::CreateThenUpdate,
        Scenario::DeleteNonExisting,
        Scenario::DeleteThenVerifyGone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::ListAllPosts => "list-all-posts",
            Scenario::PaginatedList => "paginated-list",
            Scenario::GetById => "get-by-id",
            Scenario::UnauthorizedCreate => "unauthorized-create",
            Scenario::AuthenticatedCreate => "authenticated-create",
            Scenario::PublicCreate => "public-create",
            Scenario::UpdateNonExisting => "update-non-existing",
            Scenario::CreateThenUpdate => "create-then-update",
            Scenario::DeleteNonExisting => "delete-non-existing",
            Scenario::DeleteThenVerifyGone => "delete-then-verify-gone",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Scenario::ListAllPosts => "Get all posts, expecting 200 and a JSON content type",
            Scenario::PaginatedList => "Get a page of posts, expecting exactly one page of records",
            Scenario::GetById => "Get known posts by id, expecting each id echoed back",
            Scenario::UnauthorizedCreate => {
                "Create a post on the protected route without a token, expecting 401"
            }
            Scenario::AuthenticatedCreate => {
                "Register, log in and create a post with the bearer token"
            }
            Scenario::PublicCreate => "Create a post on the public route, expecting 201",
            Scenario::UpdateNonExisting => "Update a post that does not exist, expecting 404",
            Scenario::CreateThenUpdate => "Create a post with a pinned id, then update its content",
            Scenario::DeleteNonExisting => "Delete a post under a non-numeric id, expecting 404",
            Scenario::DeleteThenVerifyGone => {
                "Delete the pinned post, then expect 404 when reading it"
            }
        }
    }

    /// Resolves an optional list of names to scenarios in canonical order.
    ///
    /// `None` selects the whole suite.
    pub fn select(names: Option<&[String]>) -> Result<Vec<Scenario>, UnknownScenario> {
        let Some(names) = names else {
            return Ok(Self::ALL.to_vec());
        };
        let requested = names
            .iter()
            .map(|name| name.parse::<Scenario>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::ALL
            .into_iter()
            .filter(|scenario| requested.contains(scenario))
            .collect())
    }

    pub async fn run(self, ctx: &ScenarioContext) -> Result<(), ScenarioError> {
        match self {
            Scenario::ListAllPosts => read::list_all_posts(ctx).await,
            Scenario::PaginatedList => read::paginated_list(ctx).await,
            Scenario::GetById => read::get_by_id(ctx).await,
            Scenario::UnauthorizedCreate => auth::unauthorized_create(ctx).await,
            Scenario::AuthenticatedCreate => auth::authenticated_create(ctx).await,
            Scenario::PublicCreate => write::public_create(ctx).await,
            Scenario::UpdateNonExisting => write::update_non_existing(ctx).await,
            Scenario::CreateThenUpdate => write::create_then_update(ctx).await,
            Scenario::DeleteNonExisting => write::delete_non_existing(ctx).await,
            Scenario::DeleteThenVerifyGone => write::delete_then_verify_gone(ctx).await,
        }
    }
}

impl std::str::FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownScenario(name.to_owned()))
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
