use crate::api::fetch_ranking;
use crate::env_variable_utils::get_app_name;
use crate::models::{RankedVideo, RankingResponse};
use crate::utils::format_fetched_at;
use yew::prelude::*;

// The no-results text itself comes from the backend in `RankingResponse::notice`.
const BACKEND_UNREACHABLE_NOTICE: &str =
    "The ranking could not be loaded. Check that the backend is running.";

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: RankedVideo,
}

#[derive(Properties, PartialEq)]
pub struct RankingGridProps {
    pub videos: Vec<RankedVideo>,
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: String,
    #[prop_or_default]
    pub error: bool,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    html! {
        <div class="bg-white rounded-lg shadow overflow-hidden flex flex-col">
            <p class="text-center text-2xl font-bold text-gray-800 py-2">
                {format!("#{}", video.rank)}
            </p>
            <a href={video.video_url.clone()} target="_blank">
                <img
                    src={video.thumbnail_url.clone()}
                    alt={video.title.clone()}
                    class="w-full aspect-video object-cover"
                    loading="lazy"
                />
            </a>
            <div class="p-4 flex-grow">
                <p class="font-semibold text-gray-900">{&video.title}</p>
                <p class="text-sm text-gray-500 mt-1">{format!("👁️ {} views", video.formatted_views)}</p>
            </div>
        </div>
    }
}

#[function_component(RankingGrid)]
pub fn ranking_grid(props: &RankingGridProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            { for props.videos.iter().map(|video| html! {
                <VideoCard key={video.rank.to_string()} video={video.clone()} />
            })}
        </div>
    }
}

#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let class = if props.error {
        "bg-red-100 text-red-800 p-4 rounded-lg mb-6"
    } else {
        "bg-yellow-100 text-yellow-800 p-4 rounded-lg mb-6"
    };

    html! { <div class={class}>{&props.message}</div> }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let ranking = use_state(|| None::<RankingResponse>);
    let error_message = use_state(|| None::<String>);
    let loading = use_state(|| true);

    // One fetch per page load; the backend cache decides whether it hits YouTube.
    {
        let ranking = ranking.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                fetch_ranking(ranking, error_message, loading).await;
            });
            || ()
        });
    }

    let body = if *loading {
        html! {
            <p class="text-center text-gray-500">{"Loading videos, please wait..."}</p>
        }
    } else if let Some(message) = &*error_message {
        html! {
            <>
                <Notice message={message.clone()} error={true} />
                <Notice message={BACKEND_UNREACHABLE_NOTICE.to_string()} />
            </>
        }
    } else if let Some(data) = &*ranking {
        html! {
            <>
                { if let Some(warning) = &data.warning {
                    html! { <Notice message={warning.clone()} /> }
                } else {
                    html! {}
                }}
                { if let Some(notice) = &data.notice {
                    html! { <Notice message={notice.clone()} /> }
                } else {
                    html! {
                        <>
                            <p class="text-sm text-gray-500 mb-4">
                                {format!(
                                    "Top {} of {} videos matching \"{}\" · updated {}",
                                    data.ranking.entries.len(),
                                    data.ranking.total_records,
                                    data.query,
                                    format_fetched_at(&data.fetched_at)
                                )}
                            </p>
                            <RankingGrid videos={data.ranking.entries.clone()} />
                        </>
                    }
                }}
            </>
        }
    } else {
        html! { <Notice message={BACKEND_UNREACHABLE_NOTICE.to_string()} /> }
    };

    html! {
        <div class="max-w-7xl mx-auto p-6">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{format!("{} 🏆", get_app_name())}</h1>
            <hr class="mb-6" />
            { body }
        </div>
    }
}
