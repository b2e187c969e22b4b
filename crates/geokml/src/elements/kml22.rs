//! The OGC KML 2.2 vocabulary.

use geokml_core::{color::Color, geometry::Vec2, time::Timestamp};

string_enums! {
    /// How altitudes in a geometry are interpreted.
    AltitudeMode as "altitudeMode" {
        ClampToGround => "clampToGround",
        RelativeToGround => "relativeToGround",
        Absolute => "absolute",
    }

    /// Whether a color is used as given or randomized per feature.
    ColorMode as "colorMode" {
        Normal => "normal",
        Random => "random",
    }

    /// Whether a balloon is shown.
    DisplayMode as "displayMode" {
        Default => "default",
        Hide => "hide",
    }

    /// Where row 0 of an image pyramid is.
    GridOrigin as "gridOrigin" {
        LowerLeft => "lowerLeft",
        UpperLeft => "upperLeft",
    }

    /// State of a list item icon.
    ItemIconState as "state" {
        Open => "open",
        Closed => "closed",
        Error => "error",
        Fetching0 => "fetching0",
        Fetching1 => "fetching1",
        Fetching2 => "fetching2",
    }

    /// How a container and its children appear in a list view.
    ListItemType as "listItemType" {
        RadioFolder => "radioFolder",
        Check => "check",
        CheckHideChildren => "checkHideChildren",
        CheckOffOnly => "checkOffOnly",
    }

    /// When a link is refreshed based on time.
    RefreshMode as "refreshMode" {
        OnChange => "onChange",
        OnInterval => "onInterval",
        OnExpire => "onExpire",
    }

    /// Projection of a photo overlay.
    Shape as "shape" {
        Rectangle => "rectangle",
        Cylinder => "cylinder",
        Sphere => "sphere",
    }

    /// Which style of a style map pair applies.
    StyleState as "key" {
        Normal => "normal",
        Highlight => "highlight",
    }

    /// When a link is refreshed based on camera movement.
    ViewRefreshMode as "viewRefreshMode" {
        Never => "never",
        OnRequest => "onRequest",
        OnStop => "onStop",
        OnRegion => "onRegion",
    }
}

text_elements! {
    address => "address";
    cookie => "cookie";
    description => "description";
    display_name => "displayName";
    href => "href";
    http_query => "httpQuery";
    link_description => "linkDescription";
    link_name => "linkName";
    message => "message";
    name => "name";
    phone_number => "phoneNumber";
    snippet => "snippet";
    source_href => "sourceHref";
    style_url => "styleUrl";
    target_href => "targetHref";
    text => "text";
    value => "value";
    view_format => "viewFormat";
}

leaf_elements! {
    altitude(f64) => "altitude";
    bottom_fov(f64) => "bottomFov";
    east(f64) => "east";
    heading(f64) => "heading";
    latitude(f64) => "latitude";
    left_fov(f64) => "leftFov";
    longitude(f64) => "longitude";
    max_altitude(f64) => "maxAltitude";
    max_fade_extent(f64) => "maxFadeExtent";
    max_lod_pixels(f64) => "maxLodPixels";
    max_session_length(f64) => "maxSessionLength";
    min_altitude(f64) => "minAltitude";
    min_fade_extent(f64) => "minFadeExtent";
    min_lod_pixels(f64) => "minLodPixels";
    min_refresh_period(f64) => "minRefreshPeriod";
    near(f64) => "near";
    north(f64) => "north";
    range(f64) => "range";
    refresh_interval(f64) => "refreshInterval";
    right_fov(f64) => "rightFov";
    roll(f64) => "roll";
    rotation(f64) => "rotation";
    scale(f64) => "scale";
    south(f64) => "south";
    tilt(f64) => "tilt";
    top_fov(f64) => "topFov";
    view_bound_scale(f64) => "viewBoundScale";
    view_refresh_time(f64) => "viewRefreshTime";
    west(f64) => "west";
    width(f64) => "width";
    x(f64) => "x";
    y(f64) => "y";
    z(f64) => "z";

    draw_order(i64) => "drawOrder";
    max_height(i64) => "maxHeight";
    max_snippet_lines(i64) => "maxSnippetLines";
    max_width(i64) => "maxWidth";
    tile_size(i64) => "tileSize";

    extrude(bool) => "extrude";
    fill(bool) => "fill";
    fly_to_view(bool) => "flyToView";
    open(bool) => "open";
    outline(bool) => "outline";
    refresh_visibility(bool) => "refreshVisibility";
    tessellate(bool) => "tessellate";
    visibility(bool) => "visibility";

    begin(Timestamp) => "begin";
    end(Timestamp) => "end";
    expires(Timestamp) => "expires";
    when(Timestamp) => "when";

    bg_color(Color) => "bgColor";
    color(Color) => "color";
    text_color(Color) => "textColor";

    hot_spot(Vec2) => "hotSpot";
    overlay_xy(Vec2) => "overlayXY";
    rotation_xy(Vec2) => "rotationXY";
    screen_xy(Vec2) => "screenXY";
    size(Vec2) => "size";

    altitude_mode(AltitudeMode) => "altitudeMode";
    color_mode(ColorMode) => "colorMode";
    display_mode(DisplayMode) => "displayMode";
    grid_origin(GridOrigin) => "gridOrigin";
    key(StyleState) => "key";
    list_item_type(ListItemType) => "listItemType";
    refresh_mode(RefreshMode) => "refreshMode";
    shape(Shape) => "shape";
    state(ItemIconState) => "state";
    view_refresh_mode(ViewRefreshMode) => "viewRefreshMode";
}

container_elements! {
    alias => "Alias";
    balloon_style => "BalloonStyle";
    camera => "Camera";
    change => "Change";
    create => "Create";
    delete => "Delete";
    document => "Document";
    extended_data => "ExtendedData";
    folder => "Folder";
    ground_overlay => "GroundOverlay";
    icon => "Icon";
    icon_style => "IconStyle";
    image_pyramid => "ImagePyramid";
    item_icon => "ItemIcon";
    label_style => "LabelStyle";
    lat_lon_alt_box => "LatLonAltBox";
    lat_lon_box => "LatLonBox";
    line_string => "LineString";
    line_style => "LineStyle";
    linear_ring => "LinearRing";
    link => "Link";
    list_style => "ListStyle";
    location => "Location";
    lod => "Lod";
    look_at => "LookAt";
    metadata => "Metadata";
    model => "Model";
    multi_geometry => "MultiGeometry";
    network_link => "NetworkLink";
    network_link_control => "NetworkLinkControl";
    orientation => "Orientation";
    pair => "Pair";
    photo_overlay => "PhotoOverlay";
    placemark => "Placemark";
    point => "Point";
    poly_style => "PolyStyle";
    polygon => "Polygon";
    region => "Region";
    resource_map => "ResourceMap";
    screen_overlay => "ScreenOverlay";
    style => "Style";
    style_map => "StyleMap";
    time_span => "TimeSpan";
    time_stamp => "TimeStamp";
    update => "Update";
    url => "Url";
    view_volume => "ViewVolume";
}
