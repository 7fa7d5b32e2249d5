use actix_web::{web, HttpResponse};

use crate::content::Content;

/// Site content handler
pub async fn content(content: web::Data<Content>) -> HttpResponse {
    HttpResponse::Ok().json(content.get_ref())
}
