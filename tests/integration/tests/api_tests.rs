//! API integration tests
//!
//! These tests require:
//! - Running MySQL instance with the schema from `migrations/` applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, plant_verification_code, TestServer,
};
use reqwest::StatusCode;

/// Register a fresh user through the full code flow, returning the
/// email and the session token.
async fn signup_user(server: &TestServer) -> (String, String) {
    let email = unique_email();
    let code = plant_verification_code(&email).await.unwrap();

    let request = SignupRequest {
        email: email.clone(),
        password: TEST_PASSWORD.to_string(),
        code,
    };
    let response = server.post("/auth/signup", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    (email, auth.token)
}

// ============================================================================
// Health checks
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Signup flow
// ============================================================================

#[tokio::test]
async fn test_signup_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();

    // Request a code (noop sender, value unknown to the test)
    let response = server
        .post("/auth/send-code", &SendCodeRequest { email: email.clone() })
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Plant a known code, replacing the server-issued one
    let code = plant_verification_code(&email).await.unwrap();

    // The planted code checks out
    let response = server
        .post(
            "/auth/verify-code",
            &VerifyCodeRequest {
                email: email.clone(),
                code: code.clone(),
            },
        )
        .await
        .unwrap();
    let verify: VerifyCodeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(verify.verified);

    // Signup consumes it
    let response = server
        .post(
            "/auth/signup",
            &SignupRequest {
                email: email.clone(),
                password: TEST_PASSWORD.to_string(),
                code: code.clone(),
            },
        )
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(auth.user.email, email);
    assert!(auth.user.email_verified);
    assert!(!auth.token.is_empty());

    // Consumed code no longer verifies
    let response = server
        .post(
            "/auth/verify-code",
            &VerifyCodeRequest {
                email: email.clone(),
                code,
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // The token authenticates against /auth/me
    let response = server.get_auth("/auth/me", &auth.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.email, email);
    assert!(me.email_verified);
}

#[tokio::test]
async fn test_verify_code_rejects_wrong_code() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();
    plant_verification_code(&email).await.unwrap();

    let response = server
        .post(
            "/auth/verify-code",
            &VerifyCodeRequest {
                email,
                code: "000000".to_string(),
            },
        )
        .await
        .unwrap();

    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.error.code, "INVALID_CODE");
}

#[tokio::test]
async fn test_send_code_conflicts_for_registered_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (email, _token) = signup_user(&server).await;

    let response = server
        .post("/auth/send-code", &SendCodeRequest { email })
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_check_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = unique_email();

    let response = server
        .get(&format!("/auth/check-email?email={email}"))
        .await
        .unwrap();
    let check: CheckEmailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!check.registered);

    let (registered_email, _token) = signup_user(&server).await;
    let response = server
        .get(&format!("/auth/check-email?email={registered_email}"))
        .await
        .unwrap();
    let check: CheckEmailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(check.registered);
}

// ============================================================================
// Login / logout
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (email, _token) = signup_user(&server).await;

    let response = server
        .post(
            "/auth/login",
            &LoginRequest {
                email: email.clone(),
                password: TEST_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.email, email);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (email, _token) = signup_user(&server).await;

    // Wrong password and unknown email produce the same error code
    let response = server
        .post(
            "/auth/login",
            &LoginRequest {
                email,
                password: "WrongPass1".to_string(),
            },
        )
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");

    let response = server
        .post(
            "/auth/login",
            &LoginRequest {
                email: unique_email(),
                password: TEST_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_email, token) = signup_user(&server).await;

    let response = server.post_auth_empty("/auth/logout", &token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/auth/me", "not-a-token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Password reset
// ============================================================================

#[tokio::test]
async fn test_forgot_password_requires_registered_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/auth/forgot-password/send-code",
            &SendCodeRequest {
                email: unique_email(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_password_reset_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (email, _token) = signup_user(&server).await;

    let response = server
        .post(
            "/auth/forgot-password/send-code",
            &SendCodeRequest { email: email.clone() },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let code = plant_verification_code(&email).await.unwrap();

    // Reusing the current password is a conflict
    let response = server
        .post(
            "/auth/forgot-password/reset",
            &ResetPasswordRequest {
                email: email.clone(),
                code: code.clone(),
                new_password: TEST_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // A different password is accepted
    let response = server
        .post(
            "/auth/forgot-password/reset",
            &ResetPasswordRequest {
                email: email.clone(),
                code,
                new_password: "BrandNewPass2".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Old password is dead, the new one logs in
    let response = server
        .post(
            "/auth/login",
            &LoginRequest {
                email: email.clone(),
                password: TEST_PASSWORD.to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .post(
            "/auth/login",
            &LoginRequest {
                email,
                password: "BrandNewPass2".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_post_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_email, token) = signup_user(&server).await;

    // Create
    let request = CreatePostRequest::sample();
    let response = server.post_auth("/posts", &token, &request).await.unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(post.title, request.title);
    assert_eq!(post.num_likes, 0);

    // Read
    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, post.id);

    // Update
    let update = UpdatePostRequest {
        title: Some("Updated title".to_string()),
        content: Some("Updated content".to_string()),
    };
    let response = server
        .put_auth(&format!("/posts/{}", post.id), &token, &update)
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Updated title");

    // Partial update: an omitted field keeps its stored value
    let partial = UpdatePostRequest {
        title: Some("Partial title".to_string()),
        content: None,
    };
    let response = server
        .put_auth(&format!("/posts/{}", post.id), &token, &partial)
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "Partial title");
    assert_eq!(updated.content, "Updated content");

    // Delete
    let response = server
        .delete_auth(&format!("/posts/{}", post.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_post_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreatePostRequest::sample();

    let response = server.post("/posts", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_post_ownership() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_author, author_token) = signup_user(&server).await;
    let (_other, other_token) = signup_user(&server).await;

    let response = server
        .post_auth("/posts", &author_token, &CreatePostRequest::sample())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdatePostRequest {
        title: Some("Hijacked".to_string()),
        content: Some("Hijacked".to_string()),
    };
    let response = server
        .put_auth(&format!("/posts/{}", post.id), &other_token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(&format!("/posts/{}", post.id), &other_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_post_title_length_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_email, token) = signup_user(&server).await;

    let request = CreatePostRequest {
        title: "t".repeat(101),
        content: "content".to_string(),
    };
    let response = server.post_auth("/posts", &token, &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_post_listing_pagination() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_email, token) = signup_user(&server).await;

    for _ in 0..3 {
        let response = server
            .post_auth("/posts", &token, &CreatePostRequest::sample())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/select/posts?limit=2&offset=0").await.unwrap();
    let page: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.posts.len() <= 2);
    assert_eq!(page.limit, 2);
    assert_eq!(page.offset, 0);
    assert!(page.total >= 3);

    // Oversized limit is clamped to the maximum
    let response = server.get("/select/posts?limit=500").await.unwrap();
    let page: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.limit, 50);
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_author, author_token) = signup_user(&server).await;
    let (_other, other_token) = signup_user(&server).await;

    let response = server
        .post_auth("/posts", &author_token, &CreatePostRequest::sample())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Create
    let response = server
        .post_auth(
            &format!("/posts/{}/comments", post.id),
            &author_token,
            &CreateCommentRequest {
                content: "First comment".to_string(),
            },
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.post_id, post.id);

    // List
    let response = server
        .get(&format!("/posts/{}/comments", post.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);

    // Non-owner cannot delete
    let response = server
        .delete_auth(&format!("/comments/{}", comment.id), &other_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Owner can
    let response = server
        .delete_auth(&format!("/comments/{}", comment.id), &author_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_email, token) = signup_user(&server).await;

    let response = server
        .post_auth(
            "/posts/999999999/comments",
            &token,
            &CreateCommentRequest {
                content: "hello".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Likes
// ============================================================================

#[tokio::test]
async fn test_like_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_author, author_token) = signup_user(&server).await;
    let (_fan, fan_token) = signup_user(&server).await;

    let response = server
        .post_auth("/posts", &author_token, &CreatePostRequest::sample())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Like
    let response = server
        .post_auth_empty(&format!("/posts/{}/like", post.id), &fan_token)
        .await
        .unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(like.liked);
    assert_eq!(like.num_likes, 1);

    // Duplicate like conflicts
    let response = server
        .post_auth_empty(&format!("/posts/{}/like", post.id), &fan_token)
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error.code, "ALREADY_LIKED");

    // Unlike
    let response = server
        .post_auth_empty(&format!("/posts/{}/unlike", post.id), &fan_token)
        .await
        .unwrap();
    let like: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!like.liked);
    assert_eq!(like.num_likes, 0);

    // Unliking again conflicts
    let response = server
        .post_auth_empty(&format!("/posts/{}/unlike", post.id), &fan_token)
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.error.code, "NOT_LIKED");
}
