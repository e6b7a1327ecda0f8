//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. Every call to the platform is I/O, so it is awaited rather than
//! blocked on, and async handlers get executed concurrently by worker threads.
use std::str::FromStr;

use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use log::*;
use lti_engine::{
    configure_deep_link,
    lti_types::{Difficulty, LaunchId},
    GradeService,
    GradebookApi,
    LaunchApi,
    LaunchCache,
    LaunchClaims,
    RosterService,
    ScoreboardApi,
};

use crate::{
    config::ToolOptions,
    data_objects::{LaunchParams, ScoreResponse},
    errors::ServerError,
    game_page::GamePage,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro.
// Several methods can share a route: `Get | Post "/path"`.
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $(| $more:ident)* $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::Any(actix_web::guard::$method())$(.or(actix_web::guard::$more()))*)
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };

    // Routes that only the LTI gateway may call. The body must carry the gateway's HMAC signature.
    ($name:ident => $method:ident $(| $more:ident)* $path:literal impl $($bounds:ty),+ where signed) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >(
            $crate::middleware::HmacMiddlewareFactory,
            $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+
        );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            pub fn new(hmac: $crate::middleware::HmacMiddlewareFactory) -> Self {
                Self(hmac, $( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::Any(actix_web::guard::$method())$(.or(actix_web::guard::$more()))*)
                    .to($name::< $( [< T $bounds:camel >], )+>)
                    .wrap(self.0);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Launch  ----------------------------------------------------
route!(launch => Post "/launch/" impl LaunchCache where signed);
/// Route handler for launch ingestion.
///
/// The body is the JSON claim set of an id-token that the gateway has already validated. The launch is registered
/// under a new launch id, and the game page for it is returned.
///
/// A `?difficulty=` query parameter (as found on deep-linked resource URLs) is used when the launch carries no custom
/// difficulty of its own.
pub async fn launch<C: LaunchCache>(
    body: web::Bytes,
    params: web::Query<LaunchParams>,
    api: web::Data<LaunchApi<C>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received launch");
    let claims = LaunchClaims::from_slice(body.as_ref()).map_err(|e| {
        debug!("💻️ Could not read launch claims. {e}");
        ServerError::InvalidRequestBody(e.to_string())
    })?;
    let context = api.register(claims).await?;
    info!("💻️ Launch {} registered for {}", context.launch_id, context.subject);
    let page = GamePage::for_launch(&context, params.difficulty.as_deref());
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(page.render()))
}

route!(game => Get "/launch/{launch_id}/" impl LaunchCache);
pub async fn game<C: LaunchCache>(
    path: web::Path<LaunchId>,
    params: web::Query<LaunchParams>,
    api: web::Data<LaunchApi<C>>,
) -> Result<HttpResponse, ServerError> {
    let launch_id = path.into_inner();
    debug!("💻️ GET game page for launch {launch_id}");
    let context = api.resolve(&launch_id).await?;
    let page = GamePage::for_launch(&context, params.difficulty.as_deref());
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(page.render()))
}

//----------------------------------------------   Deep linking  ----------------------------------------------------
route!(configure => Get | Post "/configure/{launch_id}/{difficulty}/" impl LaunchCache);
/// Route handler for the deep-linking choice.
///
/// Returns the deep-link response offering one `ltiResourceLink` for the chosen difficulty. The gateway signs it and
/// posts it back to the platform.
pub async fn configure<C: LaunchCache>(
    path: web::Path<(LaunchId, String)>,
    api: web::Data<LaunchApi<C>>,
    options: web::Data<ToolOptions>,
) -> Result<HttpResponse, ServerError> {
    let (launch_id, difficulty) = path.into_inner();
    debug!("💻️ Configure deep link for launch {launch_id} at {difficulty} difficulty");
    let difficulty = Difficulty::from_str(&difficulty).map_err(|e| ServerError::InvalidRequestPath(e.to_string()))?;
    let context = api.resolve(&launch_id).await?;
    let response = configure_deep_link(&context, &options.launch_url, difficulty)?;
    Ok(HttpResponse::Ok().json(response))
}

//----------------------------------------------   Grades  ----------------------------------------------------
route!(score => Post "/score/{launch_id}/{earned_score}/{time_spent}/" impl LaunchCache, GradeService);
pub async fn score<C, G>(
    path: web::Path<(LaunchId, String, String)>,
    launches: web::Data<LaunchApi<C>>,
    gradebook: web::Data<GradebookApi<G>>,
) -> Result<HttpResponse, ServerError>
where
    C: LaunchCache,
    G: GradeService,
{
    let (launch_id, earned_score, time_spent) = path.into_inner();
    let earned_score = parse_path_value("earned_score", &earned_score)?;
    let time_spent = parse_path_value("time_spent", &time_spent)?;
    debug!("💻️ POST score {earned_score} in {time_spent}s for launch {launch_id}");
    let context = launches.resolve(&launch_id).await?;
    let submission = gradebook.submit_grades(&context, earned_score, time_spent).await?;
    Ok(HttpResponse::Ok().json(ScoreResponse::from(submission)))
}

route!(scoreboard => Get | Post "/scoreboard/{launch_id}/" impl LaunchCache, GradeService, RosterService);
pub async fn scoreboard<C, G, R>(
    path: web::Path<LaunchId>,
    launches: web::Data<LaunchApi<C>>,
    api: web::Data<ScoreboardApi<G, R>>,
) -> Result<HttpResponse, ServerError>
where
    C: LaunchCache,
    G: GradeService,
    R: RosterService,
{
    let launch_id = path.into_inner();
    debug!("💻️ GET scoreboard for launch {launch_id}");
    let context = launches.resolve(&launch_id).await?;
    let rows = api.build_scoreboard(&context).await?;
    Ok(HttpResponse::Ok().json(rows))
}

fn parse_path_value(name: &str, value: &str) -> Result<u32, ServerError> {
    value.parse::<u32>().map_err(|e| {
        debug!("💻️ Invalid {name} in request path: {value}. {e}");
        ServerError::InvalidRequestPath(format!("{name} must be a non-negative integer, not '{value}'"))
    })
}
