//! Backend API Bindings
//!
//! Frontend wrappers for the registrar backend, JSON over HTTP.

use reqwasm::http::Request;
use serde::Serialize;

use crate::models::{Complaint, CreateCourseRequest, Decision, Instructor, TermInfo};

#[derive(Serialize)]
struct ResolveBody {
    decision: Decision,
}

pub async fn list_complaints() -> Result<Vec<Complaint>, String> {
    let resp = Request::get("/api/complaints")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("complaint fetch failed: {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn resolve_complaint(complaint: &Complaint, decision: Decision) -> Result<(), String> {
    let body = serde_json::to_string(&ResolveBody { decision }).map_err(|e| e.to_string())?;
    let resp = Request::post(&format!("/api/complaints/{}/resolve", complaint.id))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("resolve failed: {}", resp.status()));
    }
    Ok(())
}

pub async fn list_instructors() -> Result<Vec<Instructor>, String> {
    let resp = Request::get("/api/instructors?status=active")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("instructor fetch failed: {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn fetch_term() -> Result<TermInfo, String> {
    let resp = Request::get("/api/term")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("term fetch failed: {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

pub async fn create_course(req: &CreateCourseRequest) -> Result<(), String> {
    let body = serde_json::to_string(req).map_err(|e| e.to_string())?;
    let resp = Request::post("/api/courses")
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("course creation failed: {}", resp.status()));
    }
    Ok(())
}
