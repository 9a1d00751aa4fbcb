//! Live story preview server.
//!
//! Serves every registered story over HTTP so components can be eyeballed
//! in a browser while they are being built. Pages are rendered per request,
//! so a `cargo watch`-style restart picks up component changes.

use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use maud::Markup;
use tracing::{debug, info, warn};

use crate::theme::Theme;

use super::layout::{not_found_page, shell, story_page, story_url, welcome_page};
use super::registry::StoryRegistry;

/// Shared state handed to every request handler.
pub struct AppContext {
    pub registry: StoryRegistry,
    pub theme: Theme,
    pub site_title: String,
}

fn html_page(markup: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

/// Home page. Jumps straight to the first registered story, or shows the
/// welcome page when nothing is registered yet.
async fn index(ctx: web::Data<AppContext>) -> HttpResponse {
    match ctx.registry.first() {
        Some((group, story)) => HttpResponse::Found()
            .insert_header(("Location", story_url(&group.slug(), &story.slug())))
            .finish(),
        None => html_page(shell(
            &ctx.site_title,
            &ctx.site_title,
            &ctx.theme,
            &ctx.registry,
            None,
            welcome_page(&ctx.registry),
        )),
    }
}

/// Single story page, addressed by group and story slug.
async fn story_detail(
    ctx: web::Data<AppContext>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (group_slug, story_slug) = path.into_inner();
    match ctx.registry.find(&group_slug, &story_slug) {
        Some(story) => {
            debug!(group = %group_slug, story = %story_slug, "rendering story");
            html_page(shell(
                &format!("{} - {}", story.name(), ctx.site_title),
                &ctx.site_title,
                &ctx.theme,
                &ctx.registry,
                Some((&group_slug, &story_slug)),
                story_page(story),
            ))
        }
        None => {
            warn!(group = %group_slug, story = %story_slug, "story not found");
            not_found(
                &ctx,
                &format!("/stories/{}/{}", group_slug, story_slug),
            )
        }
    }
}

fn not_found(ctx: &AppContext, path: &str) -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(
            shell(
                &format!("Not found - {}", ctx.site_title),
                &ctx.site_title,
                &ctx.theme,
                &ctx.registry,
                None,
                not_found_page(path),
            )
            .into_string(),
        )
}

/// Catch-all for unknown paths, themed like the rest of the catalog.
async fn fallback(ctx: web::Data<AppContext>, req: HttpRequest) -> HttpResponse {
    warn!(path = %req.path(), "unknown path");
    not_found(&ctx, req.path())
}

/// Runs the preview server until interrupted.
pub async fn serve(host: &str, port: u16, ctx: AppContext) -> std::io::Result<()> {
    info!(
        event_type = "server_lifecycle",
        host,
        port,
        stories = ctx.registry.len(),
        "starting story server"
    );
    println!("Serving {} stories at http://{}:{}/", ctx.registry.len(), host, port);

    let data = web::Data::new(ctx);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(middleware::NormalizePath::trim())
            .route("/", web::get().to(index))
            .route("/stories/{group}/{story}", web::get().to(story_detail))
            .default_service(web::route().to(fallback))
    })
    .bind((host, port))?
    .run()
    .await
}
