//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error_code, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Register an account and return its bearer token plus user id
async fn register(server: &TestServer, request: &RegisterRequest) -> (String, String) {
    let response = server.post("/api/auth/register", request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (auth.token, auth.user.id)
}

/// Register a recruiter and post a job, returning (token, job id)
async fn post_job(server: &TestServer, request: &CreateJobRequest) -> (String, String) {
    let (token, _) = register(server, &RegisterRequest::recruiter()).await;
    let response = server.post_auth("/api/jobs", &token, request).await.unwrap();
    let job: JobResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (token, job.id)
}

// ============================================================================
// Health Check Tests
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
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_student() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::student();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "student");
    assert_eq!(auth.token_type, "Bearer");
    assert!(auth.expires_in > 0);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_recruiter_role() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::recruiter();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.role, "recruiter");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::student();

    server.post("/api/auth/register", &request).await.unwrap();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "EMAIL_ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::student();
    server.post("/api/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::student();
    server.post("/api/auth/register", &register_req).await.unwrap();

    let login_req = LoginRequest {
        email: register_req.email.clone(),
        password: "not-the-password".to_string(),
    };
    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "whatever1".to_string(),
    };

    let response = server.post("/api/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::student();
    let (token, user_id) = register(&server, &register_req).await;

    let response = server.get_auth("/api/auth/me", &token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(user.email, register_req.email);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/api/auth/me", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_forgot_password_unknown_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({ "email": "ghost@example.com" });

    let response = server.post("/api/auth/forgot-password", &body).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_verify_otp_with_wrong_code() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::student();
    register(&server, &register_req).await;

    // The console mailer makes forgot-password succeed without SMTP
    let body = serde_json::json!({ "email": register_req.email });
    let response = server.post("/api/auth/forgot-password", &body).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // A guessed code must not pass
    let body = serde_json::json!({ "email": register_req.email, "otp": "000000" });
    let response = server.post("/api/auth/verify-otp", &body).await.unwrap();
    assert_error_code(response, StatusCode::BAD_REQUEST, "INVALID_OR_EXPIRED_OTP")
        .await
        .unwrap();
}

// ============================================================================
// Job Tests
// ============================================================================

#[tokio::test]
async fn test_create_job_as_recruiter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, user_id) = register(&server, &RegisterRequest::recruiter()).await;

    let request = CreateJobRequest::unique();
    let response = server.post_auth("/api/jobs", &token, &request).await.unwrap();
    let job: JobResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(job.title, request.title);
    assert_eq!(job.job_type, "Full-time");
    assert!(job.is_open);
    assert_eq!(job.recruiter.expect("recruiter resolved").id, user_id);
}

#[tokio::test]
async fn test_create_job_as_student_forbidden() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register(&server, &RegisterRequest::student()).await;

    let request = CreateJobRequest::unique();
    let response = server.post_auth("/api/jobs", &token, &request).await.unwrap();
    assert_error_code(response, StatusCode::FORBIDDEN, "ROLE_NOT_PERMITTED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_job_defaults_experience_level() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register(&server, &RegisterRequest::recruiter()).await;

    let mut request = CreateJobRequest::unique();
    request.experience_level = None;
    let response = server.post_auth("/api/jobs", &token, &request).await.unwrap();
    let job: JobResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(job.experience_level, "0-1 years");
}

#[tokio::test]
async fn test_get_job() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateJobRequest::unique();
    let (_, job_id) = post_job(&server, &request).await;

    let response = server.get(&format!("/api/jobs/{}", job_id)).await.unwrap();
    let job: JobResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(job.id, job_id);
    assert_eq!(job.company, request.company);
}

#[tokio::test]
async fn test_get_unknown_job() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/jobs/999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_jobs_by_keyword() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateJobRequest::unique();
    let (_, job_id) = post_job(&server, &request).await;

    let response = server
        .get(&format!("/api/jobs?keyword={}", request.company))
        .await
        .unwrap();
    let jobs: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(jobs.iter().any(|j| j.id == job_id));
}

#[tokio::test]
async fn test_closed_job_hidden_from_listing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateJobRequest::unique();
    let (token, job_id) = post_job(&server, &request).await;

    // Close the posting
    let body = serde_json::json!({ "is_open": false });
    let response = server
        .put_auth(&format!("/api/jobs/{}", job_id), &token, &body)
        .await
        .unwrap();
    let job: JobResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!job.is_open);

    // Gone from the listing, still reachable directly
    let response = server
        .get(&format!("/api/jobs?keyword={}", request.company))
        .await
        .unwrap();
    let jobs: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(jobs.iter().all(|j| j.id != job_id));

    let response = server.get(&format!("/api/jobs/{}", job_id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_update_job_by_other_recruiter_forbidden() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, job_id) = post_job(&server, &CreateJobRequest::unique()).await;

    let (other_token, _) = register(&server, &RegisterRequest::recruiter()).await;
    let body = serde_json::json!({ "title": "Hijacked" });
    let response = server
        .put_auth(&format!("/api/jobs/{}", job_id), &other_token, &body)
        .await
        .unwrap();
    assert_error_code(response, StatusCode::FORBIDDEN, "NOT_JOB_OWNER")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_job() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, job_id) = post_job(&server, &CreateJobRequest::unique()).await;

    let response = server
        .delete_auth(&format!("/api/jobs/{}", job_id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/api/jobs/{}", job_id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Application Tests
// ============================================================================

#[tokio::test]
async fn test_apply_to_job() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, job_id) = post_job(&server, &CreateJobRequest::unique()).await;
    let (student_token, _) = register(&server, &RegisterRequest::student()).await;

    let response = server
        .post_auth(&format!("/api/applications/{}", job_id), &student_token, &())
        .await
        .unwrap();
    let application: ApplicationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(application.status, "applied");
}

#[tokio::test]
async fn test_duplicate_application_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, job_id) = post_job(&server, &CreateJobRequest::unique()).await;
    let (student_token, _) = register(&server, &RegisterRequest::student()).await;

    server
        .post_auth(&format!("/api/applications/{}", job_id), &student_token, &())
        .await
        .unwrap();

    let response = server
        .post_auth(&format!("/api/applications/{}", job_id), &student_token, &())
        .await
        .unwrap();
    assert_error_code(response, StatusCode::CONFLICT, "ALREADY_APPLIED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_recruiter_cannot_apply() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, job_id) = post_job(&server, &CreateJobRequest::unique()).await;
    let (recruiter_token, _) = register(&server, &RegisterRequest::recruiter()).await;

    let response = server
        .post_auth(&format!("/api/applications/{}", job_id), &recruiter_token, &())
        .await
        .unwrap();
    assert_error_code(response, StatusCode::BAD_REQUEST, "INVALID_ROLE")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_apply_to_unknown_job() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (student_token, _) = register(&server, &RegisterRequest::student()).await;

    let response = server
        .post_auth("/api/applications/999999999", &student_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_apply_to_unknown_job_as_recruiter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (recruiter_token, _) = register(&server, &RegisterRequest::recruiter()).await;

    // The missing job wins over the role problem.
    let response = server
        .post_auth("/api/applications/999999999", &recruiter_token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_my_applications_student_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (recruiter_token, _) = register(&server, &RegisterRequest::recruiter()).await;

    let response = server
        .get_auth("/api/applications/my", &recruiter_token)
        .await
        .unwrap();
    assert_error_code(response, StatusCode::FORBIDDEN, "ROLE_NOT_PERMITTED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_my_applications_include_job_summary() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateJobRequest::unique();
    let (_, job_id) = post_job(&server, &request).await;
    let (student_token, _) = register(&server, &RegisterRequest::student()).await;

    server
        .post_auth(&format!("/api/applications/{}", job_id), &student_token, &())
        .await
        .unwrap();

    let response = server
        .get_auth("/api/applications/my", &student_token)
        .await
        .unwrap();
    let applications: Vec<ApplicationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(applications.len(), 1);
    let job = applications[0].job.as_ref().expect("job summary present");
    assert_eq!(job.id, job_id);
    assert_eq!(job.title, request.title);
}

#[tokio::test]
async fn test_deleted_job_leaves_application_without_summary() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (recruiter_token, job_id) = post_job(&server, &CreateJobRequest::unique()).await;
    let (student_token, _) = register(&server, &RegisterRequest::student()).await;

    server
        .post_auth(&format!("/api/applications/{}", job_id), &student_token, &())
        .await
        .unwrap();

    server
        .delete_auth(&format!("/api/jobs/{}", job_id), &recruiter_token)
        .await
        .unwrap();

    // The student still sees the application, with the job absent
    let response = server
        .get_auth("/api/applications/my", &student_token)
        .await
        .unwrap();
    let applications: Vec<ApplicationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(applications.len(), 1);
    assert!(applications[0].job.is_none());

    // The recruiter's per-job listing 404s once the job is gone
    let response = server
        .get_auth(&format!("/api/applications/job/{}", job_id), &recruiter_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_applications_for_job_owner_only() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (recruiter_token, job_id) = post_job(&server, &CreateJobRequest::unique()).await;

    let student = RegisterRequest::student();
    let (student_token, student_id) = register(&server, &student).await;
    server
        .post_auth(&format!("/api/applications/{}", job_id), &student_token, &())
        .await
        .unwrap();

    // Owner sees the applicant
    let response = server
        .get_auth(&format!("/api/applications/job/{}", job_id), &recruiter_token)
        .await
        .unwrap();
    let applications: Vec<ApplicantApplicationResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(applications.len(), 1);
    let applicant = applications[0].applicant.as_ref().expect("applicant resolved");
    assert_eq!(applicant.id, student_id);

    // A different recruiter does not
    let (other_token, _) = register(&server, &RegisterRequest::recruiter()).await;
    let response = server
        .get_auth(&format!("/api/applications/job/{}", job_id), &other_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_update_application_status() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (recruiter_token, job_id) = post_job(&server, &CreateJobRequest::unique()).await;
    let (student_token, _) = register(&server, &RegisterRequest::student()).await;

    let response = server
        .post_auth(&format!("/api/applications/{}", job_id), &student_token, &())
        .await
        .unwrap();
    let application: ApplicationResponse =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({ "status": "shortlisted" });
    let response = server
        .put_auth(
            &format!("/api/applications/{}", application.id),
            &recruiter_token,
            &body,
        )
        .await
        .unwrap();
    let updated: ApplicationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "shortlisted");

    // The applicant cannot triage their own application
    let body = serde_json::json!({ "status": "accepted" });
    let response = server
        .put_auth(
            &format!("/api/applications/{}", application.id),
            &student_token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_profile_missing_before_creation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _) = register(&server, &RegisterRequest::student()).await;

    let response = server.get_auth("/api/profile/me", &token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_profile_upsert_creates_then_updates() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, user_id) = register(&server, &RegisterRequest::student()).await;

    // Create
    let body = profile_with_skill("Rust");
    let response = server.post_auth("/api/profile", &token, &body).await.unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.skills.len(), 1);

    // Partial update overwrites bio but leaves skills alone
    let body = serde_json::json!({ "bio": "Updated bio" });
    let response = server.post_auth("/api/profile", &token, &body).await.unwrap();
    let updated: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, profile.id);
    assert_eq!(updated.bio.as_deref(), Some("Updated bio"));
    assert_eq!(updated.skills.len(), 1);
}

// ============================================================================
// Recommendation Tests
// ============================================================================

#[tokio::test]
async fn test_recommendations_without_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    post_job(&server, &CreateJobRequest::unique()).await;
    let (token, _) = register(&server, &RegisterRequest::student()).await;

    let response = server
        .get_auth("/api/jobs/recommendations", &token)
        .await
        .unwrap();
    let jobs: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // Recent-jobs fallback, capped at 10
    assert!(!jobs.is_empty());
    assert!(jobs.len() <= 10);
}

#[tokio::test]
async fn test_recommendations_match_profile_skill() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A posting with a skill nobody else uses
    let skill = format!("Skill{}", uuid::Uuid::new_v4().simple());
    let (_, job_id) = post_job(&server, &CreateJobRequest::with_skill(&skill)).await;

    let (token, _) = register(&server, &RegisterRequest::student()).await;
    server
        .post_auth("/api/profile", &token, &profile_with_skill(&skill))
        .await
        .unwrap();

    let response = server
        .get_auth("/api/jobs/recommendations", &token)
        .await
        .unwrap();
    let jobs: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(jobs.iter().any(|j| j.id == job_id));
    assert!(jobs.len() <= 20);
}

#[tokio::test]
async fn test_recommendations_fall_back_when_nothing_matches() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    post_job(&server, &CreateJobRequest::unique()).await;

    let (token, _) = register(&server, &RegisterRequest::student()).await;
    let skill = format!("Nonexistent{}", uuid::Uuid::new_v4().simple());
    server
        .post_auth("/api/profile", &token, &profile_with_skill(&skill))
        .await
        .unwrap();

    let response = server
        .get_auth("/api/jobs/recommendations", &token)
        .await
        .unwrap();
    let jobs: Vec<JobResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    // Recent-jobs fallback, capped at 20
    assert!(!jobs.is_empty());
    assert!(jobs.len() <= 20);
}

// ============================================================================
// Password Reset Flow
// ============================================================================

#[tokio::test]
async fn test_reset_password_with_wrong_otp_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::student();
    register(&server, &register_req).await;

    let body = serde_json::json!({ "email": register_req.email });
    server.post("/api/auth/forgot-password", &body).await.unwrap();

    let body = serde_json::json!({
        "email": register_req.email,
        "otp": "123456",
        "new_password": "brand-new-pass"
    });
    let response = server.post("/api/auth/reset-password", &body).await.unwrap();
    assert_error_code(response, StatusCode::BAD_REQUEST, "INVALID_OR_EXPIRED_OTP")
        .await
        .unwrap();

    // The old password still works
    let login = LoginRequest::from_register(&register_req);
    let response = server.post("/api/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
