//! Tool catalog: the fixed mapping from tool names to remote operations.
//!
//! Each entry describes one HTTP call (method, path template, parameter
//! placement) and is the single source for both `tools/list` and request
//! construction.

use std::collections::HashMap;

use community_core::{ApiRequest, Error, HttpMethod, Result};
use serde_json::{json, Map, Value};

use crate::protocol::ToolDefinition;

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Integer,
    String,
}

impl ParamType {
    fn schema_type(&self) -> &'static str {
        match self {
            ParamType::Integer => "integer",
            ParamType::String => "string",
        }
    }
}

/// Where a parameter goes in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
}

/// Value used when an optional parameter is not supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Integer(i64),
    Str(&'static str),
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            DefaultValue::Integer(n) => json!(n),
            DefaultValue::Str(s) => json!(s),
        }
    }
}

/// One tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub ty: ParamType,
    pub location: Location,
    pub required: bool,
    pub default: Option<DefaultValue>,
    pub choices: &'static [&'static str],
}

impl ParamSpec {
    const fn new(
        name: &'static str,
        ty: ParamType,
        location: Location,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            ty,
            location,
            required: false,
            default: None,
            choices: &[],
        }
    }

    /// Required integer identifier placed in the path.
    const fn id(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::Integer, Location::Path, description).required()
    }

    const fn body(name: &'static str, ty: ParamType, description: &'static str) -> Self {
        Self::new(name, ty, Location::Body, description)
    }

    const fn query(name: &'static str, ty: ParamType, description: &'static str) -> Self {
        Self::new(name, ty, Location::Query, description)
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn default_int(mut self, value: i64) -> Self {
        self.default = Some(DefaultValue::Integer(value));
        self
    }

    const fn default_str(mut self, value: &'static str) -> Self {
        self.default = Some(DefaultValue::Str(value));
        self
    }

    const fn one_of(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = choices;
        self
    }

    fn schema(&self) -> Value {
        let mut schema = json!({
            "type": self.ty.schema_type(),
            "description": self.description,
        });
        if !self.choices.is_empty() {
            schema["enum"] = json!(self.choices);
        }
        if let Some(default) = self.default {
            schema["default"] = default.to_value();
        }
        schema
    }

    /// Supplied value, falling back to the default. `null` counts as absent.
    fn resolve(&self, args: &Map<String, Value>) -> Result<Option<Value>> {
        match args.get(self.name) {
            Some(Value::Null) | None => match self.default {
                Some(default) => Ok(Some(default.to_value())),
                None if self.required => Err(Error::InvalidArguments(format!(
                    "missing required argument '{}'",
                    self.name
                ))),
                None => Ok(None),
            },
            Some(value) => Ok(Some(value.clone())),
        }
    }
}

/// Render a scalar argument for a path segment or query string.
fn scalar_text(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(Error::InvalidArguments(format!(
            "argument '{}' must be a string or number",
            name
        ))),
    }
}

/// One catalog entry.
#[derive(Debug)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub requires_auth: bool,
    /// Successful responses carry an `access_token` to store in the session.
    pub issues_token: bool,
    pub params: &'static [ParamSpec],
}

impl ToolSpec {
    /// JSON Schema describing the tool's arguments.
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.schema()))
            .collect();

        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        if !required.is_empty() {
            schema["required"] = json!(required);
        }
        schema
    }

    /// Definition for `tools/list`.
    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema(),
        }
    }

    /// Build the single HTTP request for this tool.
    ///
    /// Fails with [`Error::InvalidArguments`] before any I/O when a required
    /// argument is missing or a path/query argument is not a scalar.
    /// Arguments the entry does not name are ignored.
    pub fn build_request(&self, args: &Map<String, Value>) -> Result<ApiRequest> {
        let mut path_values: HashMap<&str, String> = HashMap::new();
        let mut query = Vec::new();
        let mut body = Map::new();

        for param in self.params {
            let Some(value) = param.resolve(args)? else {
                continue;
            };

            match param.location {
                Location::Path => {
                    let text = scalar_text(param.name, &value)?;
                    if text.trim().is_empty() {
                        return Err(Error::InvalidArguments(format!(
                            "argument '{}' must not be empty",
                            param.name
                        )));
                    }
                    path_values.insert(param.name, text);
                }
                Location::Query => {
                    query.push((param.name.to_string(), scalar_text(param.name, &value)?));
                }
                Location::Body => {
                    body.insert(param.name.to_string(), value);
                }
            }
        }

        let mut request = ApiRequest::new(self.method, "/");
        for part in self.path.split('/').filter(|s| !s.is_empty()) {
            match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                Some(name) => {
                    let value = path_values.remove(name).ok_or_else(|| {
                        Error::InvalidArguments(format!("missing required argument '{}'", name))
                    })?;
                    request = request.segment(value);
                }
                None => request = request.segment(part),
            }
        }

        request.query = query;
        if self.params.iter().any(|p| p.location == Location::Body) {
            request.body = Some(Value::Object(body));
        }

        Ok(request)
    }
}

/// Look up a catalog entry by tool name.
pub fn find(name: &str) -> Option<&'static ToolSpec> {
    CATALOG.iter().find(|t| t.name == name)
}

/// Definitions of every catalog tool, in catalog order.
pub fn available_tools() -> Vec<ToolDefinition> {
    CATALOG.iter().map(ToolSpec::definition).collect()
}

use HttpMethod::{Get, Patch, Post};
use ParamType::{Integer, String as Text};

const PROJECT_ID: ParamSpec = ParamSpec::id("project_id", "ID of the project");
const POST_ID: ParamSpec = ParamSpec::id("post_id", "ID of the post");
const CONVERSATION_ID: ParamSpec = ParamSpec::id("conversation_id", "ID of the conversation");

/// The fixed tool catalog.
pub static CATALOG: &[ToolSpec] = &[
    // ---- Authentication ----------------------------------------------------
    ToolSpec {
        name: "login",
        description: "Log in to the Community API. The returned access token is kept for \
                      subsequent tool calls",
        method: Post,
        path: "/auth/login",
        requires_auth: false,
        issues_token: true,
        params: &[
            ParamSpec::body("username", Text, "Username to log in with").required(),
            ParamSpec::body("password", Text, "Password for the account").required(),
        ],
    },
    ToolSpec {
        name: "register_user",
        description: "Register a new user account",
        method: Post,
        path: "/auth/register",
        requires_auth: false,
        issues_token: false,
        params: &[
            ParamSpec::body("email", Text, "Email address").required(),
            ParamSpec::body("username", Text, "Desired username").required(),
            ParamSpec::body("password", Text, "Password for the account").required(),
            ParamSpec::body("full_name", Text, "Full name").required(),
            ParamSpec::body("phone", Text, "Phone number").required(),
        ],
    },
    ToolSpec {
        name: "get_current_user",
        description: "Get the authenticated user's profile",
        method: Get,
        path: "/auth/me",
        requires_auth: true,
        issues_token: false,
        params: &[],
    },
    ToolSpec {
        name: "list_users",
        description: "List all users (admin only)",
        method: Get,
        path: "/auth/users",
        requires_auth: true,
        issues_token: false,
        params: &[],
    },
    // ---- Projects ----------------------------------------------------------
    ToolSpec {
        name: "create_project",
        description: "Create a new project",
        method: Post,
        path: "/projects",
        requires_auth: true,
        issues_token: false,
        params: &[
            ParamSpec::body("name", Text, "Name of the project").required(),
            ParamSpec::body("description", Text, "Description of the project").default_str(""),
        ],
    },
    ToolSpec {
        name: "list_projects",
        description: "List all projects the current user has access to",
        method: Get,
        path: "/projects",
        requires_auth: true,
        issues_token: false,
        params: &[],
    },
    ToolSpec {
        name: "get_project",
        description: "Get details of a project, including owner information",
        method: Get,
        path: "/projects/{project_id}",
        requires_auth: true,
        issues_token: false,
        params: &[PROJECT_ID],
    },
    ToolSpec {
        name: "update_project",
        description: "Update a project's details",
        method: Patch,
        path: "/projects/{project_id}",
        requires_auth: true,
        issues_token: false,
        params: &[
            PROJECT_ID,
            ParamSpec::body("name", Text, "New name for the project"),
            ParamSpec::body("description", Text, "New description"),
            ParamSpec::body("status", Text, "New project status").one_of(&[
                "in_talks",
                "now_coding",
                "needs_review",
                "complete",
            ]),
            ParamSpec::body("status_note", Text, "Note about the current status"),
        ],
    },
    // ---- Issues ------------------------------------------------------------
    ToolSpec {
        name: "create_issue",
        description: "Create a new issue in a project",
        method: Post,
        path: "/projects/{project_id}/issues",
        requires_auth: true,
        issues_token: false,
        params: &[
            PROJECT_ID,
            ParamSpec::body("title", Text, "Title of the issue").required(),
            ParamSpec::body("description", Text, "Detailed description").default_str(""),
            ParamSpec::body("assignee_id", Integer, "User ID to assign the issue to"),
        ],
    },
    ToolSpec {
        name: "list_issues",
        description: "List issues in a project with optional filtering",
        method: Get,
        path: "/projects/{project_id}/issues",
        requires_auth: true,
        issues_token: false,
        params: &[
            PROJECT_ID,
            ParamSpec::query("state", Text, "Filter by state").one_of(&["open", "closed"]),
            ParamSpec::query("assignee_id", Integer, "Filter by assignee user ID"),
        ],
    },
    ToolSpec {
        name: "get_issue",
        description: "Get a single issue with its details",
        method: Get,
        path: "/projects/{project_id}/issues/{issue_id}",
        requires_auth: true,
        issues_token: false,
        params: &[PROJECT_ID, ParamSpec::id("issue_id", "ID of the issue")],
    },
    ToolSpec {
        name: "update_issue",
        description: "Update an existing issue",
        method: Patch,
        path: "/projects/{project_id}/issues/{issue_id}",
        requires_auth: true,
        issues_token: false,
        params: &[
            PROJECT_ID,
            ParamSpec::id("issue_id", "ID of the issue to update"),
            ParamSpec::body("title", Text, "New title"),
            ParamSpec::body("description", Text, "New description"),
            ParamSpec::body("state", Text, "New state").one_of(&["open", "closed"]),
            ParamSpec::body("assignee_id", Integer, "New assignee user ID"),
        ],
    },
    // ---- Feed --------------------------------------------------------------
    ToolSpec {
        name: "create_post",
        description: "Create a new post in the feed",
        method: Post,
        path: "/feed/posts",
        requires_auth: true,
        issues_token: false,
        params: &[
            ParamSpec::body("content", Text, "Post text").required(),
            ParamSpec::body("visibility", Text, "Who can see the post")
                .one_of(&["public", "project", "private"])
                .default_str("public"),
            ParamSpec::body("project_id", Integer, "Project to associate the post with"),
        ],
    },
    ToolSpec {
        name: "get_feed",
        description: "Get the feed of posts with author info, likes and comments",
        method: Get,
        path: "/feed",
        requires_auth: true,
        issues_token: false,
        params: &[ParamSpec::query("limit", Integer, "Maximum number of posts").default_int(10)],
    },
    ToolSpec {
        name: "get_post",
        description: "Get a post including comments and engagement",
        method: Get,
        path: "/feed/posts/{post_id}",
        requires_auth: true,
        issues_token: false,
        params: &[POST_ID],
    },
    ToolSpec {
        name: "like_post",
        description: "Like a post (toggles the like)",
        method: Post,
        path: "/feed/posts/{post_id}/like",
        requires_auth: true,
        issues_token: false,
        params: &[POST_ID],
    },
    ToolSpec {
        name: "save_post",
        description: "Save a post for later (toggles the save)",
        method: Post,
        path: "/feed/posts/{post_id}/save",
        requires_auth: true,
        issues_token: false,
        params: &[POST_ID],
    },
    ToolSpec {
        name: "get_saved_posts",
        description: "List posts saved by the current user",
        method: Get,
        path: "/feed/saved",
        requires_auth: true,
        issues_token: false,
        params: &[],
    },
    ToolSpec {
        name: "comment_on_post",
        description: "Add a comment to a post",
        method: Post,
        path: "/feed/posts/{post_id}/comments",
        requires_auth: true,
        issues_token: false,
        params: &[
            POST_ID,
            ParamSpec::body("content", Text, "Comment text").required(),
        ],
    },
    ToolSpec {
        name: "get_post_comments",
        description: "Get all comments on a post",
        method: Get,
        path: "/feed/posts/{post_id}/comments",
        requires_auth: true,
        issues_token: false,
        params: &[POST_ID],
    },
    // ---- Messaging ---------------------------------------------------------
    ToolSpec {
        name: "start_conversation",
        description: "Start a new conversation with another user",
        method: Post,
        path: "/messages",
        requires_auth: true,
        issues_token: false,
        params: &[
            ParamSpec::body("recipient_id", Integer, "User ID of the person to message")
                .required(),
            ParamSpec::body("initial_message", Text, "First message to send"),
        ],
    },
    ToolSpec {
        name: "send_message",
        description: "Send a message in a conversation",
        method: Post,
        path: "/messages/{conversation_id}/messages",
        requires_auth: true,
        issues_token: false,
        params: &[
            CONVERSATION_ID,
            ParamSpec::body("content", Text, "Message content").required(),
        ],
    },
    ToolSpec {
        name: "list_conversations",
        description: "List conversations with participants and last message",
        method: Get,
        path: "/messages",
        requires_auth: true,
        issues_token: false,
        params: &[],
    },
    ToolSpec {
        name: "get_conversation",
        description: "Get a conversation with its participants",
        method: Get,
        path: "/messages/{conversation_id}",
        requires_auth: true,
        issues_token: false,
        params: &[CONVERSATION_ID],
    },
    ToolSpec {
        name: "get_conversation_messages",
        description: "Get messages in a conversation",
        method: Get,
        path: "/messages/{conversation_id}/messages",
        requires_auth: true,
        issues_token: false,
        params: &[
            CONVERSATION_ID,
            ParamSpec::query("limit", Integer, "Maximum number of messages").default_int(50),
        ],
    },
    ToolSpec {
        name: "get_unread_message_count",
        description: "Count unread messages across conversations",
        method: Get,
        path: "/messages/unread/count",
        requires_auth: true,
        issues_token: false,
        params: &[],
    },
    // ---- Notifications -----------------------------------------------------
    ToolSpec {
        name: "get_notifications",
        description: "Get notifications for the current user with unread count",
        method: Get,
        path: "/notifications",
        requires_auth: true,
        issues_token: false,
        params: &[
            ParamSpec::query("limit", Integer, "Maximum number of notifications").default_int(20),
        ],
    },
    ToolSpec {
        name: "get_notification_stats",
        description: "Get notification totals by read state and type",
        method: Get,
        path: "/notifications/stats",
        requires_auth: true,
        issues_token: false,
        params: &[],
    },
    ToolSpec {
        name: "mark_notification_read",
        description: "Mark a notification as read",
        method: Patch,
        path: "/notifications/{notification_id}/read",
        requires_auth: true,
        issues_token: false,
        params: &[ParamSpec::id("notification_id", "ID of the notification")],
    },
    ToolSpec {
        name: "mark_all_notifications_read",
        description: "Mark every notification as read",
        method: Post,
        path: "/notifications/mark-all-read",
        requires_auth: true,
        issues_token: false,
        params: &[],
    },
    // ---- Blogs -------------------------------------------------------------
    ToolSpec {
        name: "create_blog",
        description: "Create a new blog post",
        method: Post,
        path: "/blogs",
        requires_auth: true,
        issues_token: false,
        params: &[
            ParamSpec::body("title", Text, "Title of the blog post").required(),
            ParamSpec::body("content", Text, "Full content of the blog").required(),
            ParamSpec::body("summary", Text, "Short summary or excerpt").default_str(""),
            ParamSpec::body("project_id", Integer, "Project to associate with"),
        ],
    },
    ToolSpec {
        name: "list_blogs",
        description: "List blog posts with author info",
        method: Get,
        path: "/blogs",
        requires_auth: false,
        issues_token: false,
        params: &[ParamSpec::query("limit", Integer, "Maximum number of blogs").default_int(10)],
    },
    ToolSpec {
        name: "get_blog",
        description: "Get a blog post",
        method: Get,
        path: "/blogs/{blog_id}",
        requires_auth: false,
        issues_token: false,
        params: &[ParamSpec::id("blog_id", "ID of the blog")],
    },
    // ---- Team members ------------------------------------------------------
    ToolSpec {
        name: "add_team_member",
        description: "Add a team member to a project",
        method: Post,
        path: "/projects/{project_id}/team",
        requires_auth: true,
        issues_token: false,
        params: &[
            PROJECT_ID,
            ParamSpec::body("user_id", Integer, "ID of the user to add").required(),
            ParamSpec::body("role", Text, "Role for the member")
                .one_of(&["owner", "maintainer", "developer"])
                .default_str("developer"),
        ],
    },
    ToolSpec {
        name: "list_team_members",
        description: "List team members of a project with their roles",
        method: Get,
        path: "/projects/{project_id}/team",
        requires_auth: true,
        issues_token: false,
        params: &[PROJECT_ID],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = CATALOG.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_path_placeholders_match_path_params() {
        for tool in CATALOG {
            let placeholders: HashSet<&str> = tool
                .path
                .split('/')
                .filter_map(|p| p.strip_prefix('{').and_then(|p| p.strip_suffix('}')))
                .collect();
            let path_params: HashSet<&str> = tool
                .params
                .iter()
                .filter(|p| p.location == Location::Path)
                .map(|p| p.name)
                .collect();

            assert_eq!(placeholders, path_params, "tool {}", tool.name);
            assert!(
                tool.params
                    .iter()
                    .filter(|p| p.location == Location::Path)
                    .all(|p| p.required),
                "path params of {} must be required",
                tool.name
            );
        }
    }

    #[test]
    fn test_only_login_issues_token() {
        let issuers: Vec<&str> = CATALOG
            .iter()
            .filter(|t| t.issues_token)
            .map(|t| t.name)
            .collect();
        assert_eq!(issuers, vec!["login"]);
    }

    #[test]
    fn test_auth_free_tools() {
        let open: HashSet<&str> = CATALOG
            .iter()
            .filter(|t| !t.requires_auth)
            .map(|t| t.name)
            .collect();
        let expected: HashSet<&str> = ["login", "register_user", "list_blogs", "get_blog"]
            .into_iter()
            .collect();
        assert_eq!(open, expected);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("create_issue").unwrap().method, HttpMethod::Post);
        assert!(find("drop_database").is_none());
    }

    #[test]
    fn test_input_schema() {
        let schema = find("create_post").unwrap().input_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["content"]));
        assert_eq!(schema["properties"]["content"]["type"], "string");
        assert_eq!(
            schema["properties"]["visibility"]["enum"],
            json!(["public", "project", "private"])
        );
        assert_eq!(schema["properties"]["visibility"]["default"], "public");
        assert_eq!(schema["properties"]["project_id"]["type"], "integer");
    }

    #[test]
    fn test_input_schema_without_params() {
        let schema = find("list_projects").unwrap().input_schema();
        assert_eq!(schema["properties"], json!({}));
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_build_create_project_with_default() {
        let req = find("create_project")
            .unwrap()
            .build_request(&args(json!({"name": "New App"})))
            .unwrap();

        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path(), "/projects");
        assert!(req.query.is_empty());
        assert_eq!(req.body, Some(json!({"name": "New App", "description": ""})));
        assert!(req.bearer.is_none());
    }

    #[test]
    fn test_build_path_and_body() {
        let req = find("update_issue")
            .unwrap()
            .build_request(&args(json!({
                "project_id": 3,
                "issue_id": 14,
                "state": "closed",
                "title": null,
                "unrelated": "ignored"
            })))
            .unwrap();

        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path(), "/projects/3/issues/14");
        assert_eq!(req.body, Some(json!({"state": "closed"})));
    }

    #[test]
    fn test_build_keeps_explicit_falsy_values() {
        let req = find("update_issue")
            .unwrap()
            .build_request(&args(json!({
                "project_id": 3,
                "issue_id": 14,
                "description": "",
                "assignee_id": 0
            })))
            .unwrap();

        assert_eq!(req.body, Some(json!({"description": "", "assignee_id": 0})));
    }

    #[test]
    fn test_build_query_with_default_limit() {
        let req = find("get_conversation_messages")
            .unwrap()
            .build_request(&args(json!({"conversation_id": 8})))
            .unwrap();

        assert_eq!(req.path(), "/messages/8/messages");
        assert_eq!(req.query, vec![("limit".to_string(), "50".to_string())]);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_build_query_omits_absent_optionals() {
        let req = find("list_issues")
            .unwrap()
            .build_request(&args(json!({"project_id": 2, "state": "open"})))
            .unwrap();

        assert_eq!(req.query, vec![("state".to_string(), "open".to_string())]);
    }

    #[test]
    fn test_build_body_only_optionals_sends_empty_object() {
        let req = find("update_project")
            .unwrap()
            .build_request(&args(json!({"project_id": 1})))
            .unwrap();

        assert_eq!(req.body, Some(json!({})));
    }

    #[test]
    fn test_build_string_path_value() {
        let req = find("get_blog")
            .unwrap()
            .build_request(&args(json!({"blog_id": "my-first-post"})))
            .unwrap();

        assert_eq!(req.path(), "/blogs/my-first-post");
    }

    #[test]
    fn test_missing_required_argument() {
        let err = find("comment_on_post")
            .unwrap()
            .build_request(&args(json!({"post_id": 4})))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArguments(_)));
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn test_missing_path_argument() {
        let err = find("get_project")
            .unwrap()
            .build_request(&Map::new())
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArguments(_)));
        assert!(err.to_string().contains("project_id"));
    }

    #[test]
    fn test_non_scalar_path_argument() {
        let err = find("get_post")
            .unwrap()
            .build_request(&args(json!({"post_id": {"id": 1}})))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArguments(_)));
    }

    #[test]
    fn test_empty_path_argument() {
        let err = find("get_blog")
            .unwrap()
            .build_request(&args(json!({"blog_id": " "})))
            .unwrap_err();

        assert!(matches!(err, Error::InvalidArguments(_)));
    }

    #[test]
    fn test_available_tools_matches_catalog() {
        let tools = available_tools();
        assert_eq!(tools.len(), CATALOG.len());
        assert_eq!(tools[0].name, "login");
        assert!(tools.iter().all(|t| t.input_schema["type"] == "object"));
    }
}
