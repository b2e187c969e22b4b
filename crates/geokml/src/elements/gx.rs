//! The Google `gx:` extension vocabulary.
//!
//! Any tree containing one of these elements needs the `xmlns:gx`
//! declaration; [`kml`](crate::document::kml) adds it automatically.

use geokml_core::{color::Color, geometry::Coordinate};

use crate::{
    element::{Container, Element, Leaf},
    value::{Value, encode_bool, encode_float},
};

string_enums! {
    /// Altitude modes that extend [`AltitudeMode`](super::AltitudeMode)
    /// with sea floor references.
    GxAltitudeMode as "gx:altitudeMode" {
        ClampToGround => "clampToGround",
        RelativeToGround => "relativeToGround",
        Absolute => "absolute",
        ClampToSeaFloor => "clampToSeaFloor",
        RelativeToSeaFloor => "relativeToSeaFloor",
    }

    /// How the camera moves to a tour position.
    GxFlyToMode as "gx:flyToMode" {
        Bounce => "bounce",
        Smooth => "smooth",
    }

    /// Tour control action.
    GxPlayMode as "gx:playMode" {
        Pause => "pause",
    }
}

text_elements! {
    gx_value => "gx:value";
}

leaf_elements! {
    gx_altitude_mode(GxAltitudeMode) => "gx:altitudeMode";
    gx_fly_to_mode(GxFlyToMode) => "gx:flyToMode";
    gx_play_mode(GxPlayMode) => "gx:playMode";

    gx_altitude_offset(f64) => "gx:altitudeOffset";
    gx_delayed_start(f64) => "gx:delayedStart";
    gx_duration(f64) => "gx:duration";
    gx_h(f64) => "gx:h";
    gx_horiz_fov(f64) => "gx:horizFov";
    gx_outer_width(f64) => "gx:outerWidth";
    gx_physical_width(f64) => "gx:physicalWidth";
    gx_rank(f64) => "gx:rank";
    gx_w(f64) => "gx:w";

    gx_draw_order(i64) => "gx:drawOrder";
    gx_x(i64) => "gx:x";
    gx_y(i64) => "gx:y";

    gx_balloon_visibility(bool) => "gx:balloonVisibility";
    gx_interpolate(bool) => "gx:interpolate";
    gx_label_visibility(bool) => "gx:labelVisibility";

    gx_outer_color(Color) => "gx:outerColor";
}

container_elements! {
    gx_animated_update => "gx:AnimatedUpdate";
    gx_fly_to => "gx:FlyTo";
    gx_lat_lon_quad => "gx:LatLonQuad";
    gx_multi_track => "gx:MultiTrack";
    gx_playlist => "gx:Playlist";
    gx_sound_cue => "gx:SoundCue";
    gx_time_span => "gx:TimeSpan";
    gx_time_stamp => "gx:TimeStamp";
    gx_tour => "gx:Tour";
    gx_tour_control => "gx:TourControl";
    gx_track => "gx:Track";
    gx_viewer_options => "gx:ViewerOptions";
    gx_wait => "gx:Wait";
}

/// Returns a `<gx:coord>` track point, written `lon lat[ alt]`.
///
/// # Examples
///
/// ```
/// use geokml::{elements::gx_coord, geometry::Coordinate};
///
/// let point = gx_coord(Coordinate::new(1.23, 4.56).with_alt(7.89));
/// assert_eq!(point.to_xml_string(), "<gx:coord>1.23 4.56 7.89</gx:coord>");
/// ```
pub fn gx_coord(coord: Coordinate) -> Element {
    Leaf::new("gx:coord", Value::GxCoord(coord)).into()
}

/// Returns `<gx:angles>` holding heading, tilt and roll separated by spaces.
pub fn gx_angles(heading: f64, tilt: f64, roll: f64) -> Element {
    let text = format!(
        "{} {} {}",
        encode_float(heading),
        encode_float(tilt),
        encode_float(roll)
    );
    Leaf::new("gx:angles", text).into()
}

/// Returns a `<gx:option>` toggling a viewer feature such as
/// `"historicalimagery"`, `"sunlight"` or `"streetview"`.
pub fn gx_option(name: impl Into<String>, enabled: bool) -> Element {
    Leaf::new("gx:option", "")
        .with_attribute("name", name)
        .with_attribute("enabled", encode_bool(enabled))
        .into()
}

/// Returns a `<gx:SimpleArrayField>` declaring a per-point data array.
pub fn gx_simple_array_field(
    name: impl Into<String>,
    field_type: impl Into<String>,
    children: impl IntoIterator<Item = Element>,
) -> Element {
    Container::new("gx:SimpleArrayField")
        .with_attribute("name", name)
        .with_attribute("type", field_type)
        .with_children(children)
        .into()
}

/// Returns a `<gx:SimpleArrayData>` holding one `<gx:value>` per track point.
pub fn gx_simple_array_data(
    name: impl Into<String>,
    children: impl IntoIterator<Item = Element>,
) -> Element {
    Container::new("gx:SimpleArrayData")
        .with_attribute("name", name)
        .with_children(children)
        .into()
}
