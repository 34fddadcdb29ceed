//! Projection of processed gadgets into response metadata

use crate::core::process::ProcessedGadget;
use crate::core::rpc::types::{
    FeatureDetail, GadgetMetadata, OrderedEnumValue, UserPrefMetadata, ViewMetadata,
};
use crate::core::spec::{UserPref, View};
use crate::core::uri::{UriBuilder, UriError};

/// Project a processed gadget into its metadata entry
///
/// Pure apart from the URI builder call; a failure there fails only this
/// gadget, not the batch.
pub fn project(
    gadget: &ProcessedGadget,
    uris: &dyn UriBuilder,
) -> Result<GadgetMetadata, UriError> {
    let iframe_url = uris.make_rendering_uri(gadget)?;
    let context = &gadget.context;
    let prefs = &gadget.spec.module_prefs;

    let views = gadget
        .spec
        .views
        .iter()
        .map(|(name, view)| (name.clone(), project_view(view)))
        .collect();

    let features = prefs.features.iter().map(|f| f.name.clone()).collect();
    let feature_details = prefs
        .features
        .iter()
        .map(|f| {
            let detail = FeatureDetail {
                required: f.required,
                parameters: f
                    .params
                    .iter()
                    .map(|(name, values)| (name.clone(), values.clone()))
                    .collect(),
            };
            (f.name.clone(), detail)
        })
        .collect();

    let user_prefs = gadget
        .spec
        .user_prefs
        .iter()
        .map(|pref| (pref.name.clone(), project_user_pref(pref)))
        .collect();

    let links = prefs
        .links
        .iter()
        .map(|link| (link.rel.clone(), link.href.clone()))
        .collect();

    Ok(GadgetMetadata {
        iframe_url,
        url: context.url.clone(),
        module_id: context.module_id,
        title: prefs.title.clone(),
        title_url: prefs.title_url.clone(),
        directory_title: prefs.directory_title.clone(),
        thumbnail: prefs.thumbnail.clone(),
        screenshot: prefs.screenshot.clone(),
        author: prefs.author.clone(),
        author_email: prefs.author_email.clone(),
        author_affiliation: prefs.author_affiliation.clone(),
        author_location: prefs.author_location.clone(),
        author_photo: prefs.author_photo.clone(),
        author_aboutme: prefs.author_aboutme.clone(),
        author_quote: prefs.author_quote.clone(),
        author_link: prefs.author_link.clone(),
        categories: prefs.categories.clone(),
        height: prefs.height,
        width: prefs.width,
        show_stats: prefs.show_stats,
        show_in_directory: prefs.show_in_directory,
        singleton: prefs.singleton,
        scaling: prefs.scaling,
        scrolling: prefs.scrolling,
        views,
        features,
        feature_details,
        user_prefs,
        links,
    })
}

fn project_view(view: &View) -> ViewMetadata {
    ViewMetadata {
        view_type: view.view_type,
        quirks: view.quirks,
        preferred_height: view.preferred_height,
        preferred_width: view.preferred_width,
        attributes: view
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    }
}

fn project_user_pref(pref: &UserPref) -> UserPrefMetadata {
    // Declaration order is kept in orderedEnumValues; enumValues is the
    // flat lookup map derived from the same pairs.
    let ordered: Vec<OrderedEnumValue> = pref
        .enum_values
        .iter()
        .map(|pair| OrderedEnumValue {
            value: pair.value.clone(),
            display_value: pair.display().to_string(),
        })
        .collect();
    let flat = ordered
        .iter()
        .map(|pair| (pair.value.clone(), pair.display_value.clone()))
        .collect();

    UserPrefMetadata {
        display_name: pref.display_name.clone(),
        data_type: pref.data_type,
        default_value: pref.default_value.clone(),
        enum_values: flat,
        ordered_enum_values: ordered,
    }
}
