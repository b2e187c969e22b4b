//! Golden output tests for complete documents
//!
//! Each test builds a document from the public constructors and compares the
//! serialized bytes with the expected markup.

use geokml::{
    Element,
    color::Color,
    elements::*,
    geometry::{Coordinate, Units, Vec2},
    time::Timestamp,
};

const PROLOG: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

fn write_document(element: &Element) -> String {
    let mut out = Vec::new();
    element
        .write_document(&mut out)
        .expect("writing to memory succeeds");
    String::from_utf8(out).expect("output is UTF-8")
}

fn at(hour: u32, minute: u32, second: u32) -> Timestamp {
    Timestamp::from_ymd_hms(2010, 5, 28, hour, minute, second).expect("valid timestamp")
}

#[test]
fn test_easy_trail() {
    let element = placemark([
        name("Easy trail"),
        extended_data([schema_data(
            "#TrailHeadTypeId",
            [
                simple_data("TrailHeadName", "Pi in the sky"),
                simple_data("TrailLength", "3.14159"),
                simple_data("ElevationGain", "10"),
            ],
        )]),
        point([coordinates([Coordinate::new(-122.000, 37.002)])]),
    ]);

    let expected = concat!(
        "<Placemark>",
        "<name>Easy trail</name>",
        "<ExtendedData>",
        "<SchemaData schemaUrl=\"#TrailHeadTypeId\">",
        "<SimpleData name=\"TrailHeadName\">Pi in the sky</SimpleData>",
        "<SimpleData name=\"TrailLength\">3.14159</SimpleData>",
        "<SimpleData name=\"ElevationGain\">10</SimpleData>",
        "</SchemaData>",
        "</ExtendedData>",
        "<Point>",
        "<coordinates>-122,37.002</coordinates>",
        "</Point>",
        "</Placemark>",
    );
    assert_eq!(element.to_xml_string(), expected);
}

#[test]
fn test_simple_crosshairs() {
    let element = screen_overlay([
        name("Simple crosshairs"),
        description(
            "This screen overlay uses fractional positioning to put the image in the exact center of the screen",
        ),
        icon([href("http://myserver/myimage.jpg")]),
        overlay_xy(Vec2::fraction(0.5, 0.5)),
        screen_xy(Vec2::fraction(0.5, 0.5)),
        rotation(39.37878630116985),
        size(Vec2::new(0.0, 0.0, Units::Pixels, Units::Pixels)),
    ]);

    let expected = concat!(
        "<ScreenOverlay>",
        "<name>Simple crosshairs</name>",
        "<description>This screen overlay uses fractional positioning to put the image in the exact center of the screen</description>",
        "<Icon>",
        "<href>http://myserver/myimage.jpg</href>",
        "</Icon>",
        "<overlayXY x=\"0.5\" y=\"0.5\" xunits=\"fraction\" yunits=\"fraction\"></overlayXY>",
        "<screenXY x=\"0.5\" y=\"0.5\" xunits=\"fraction\" yunits=\"fraction\"></screenXY>",
        "<rotation>39.37878630116985</rotation>",
        "<size x=\"0\" y=\"0\" xunits=\"pixels\" yunits=\"pixels\"></size>",
        "</ScreenOverlay>",
    );
    assert_eq!(element.to_xml_string(), expected);
}

#[test]
fn test_shared_style_in_folder() {
    let style0 = shared_style("0", []);
    let url = style0.url();
    let element = folder([style0.into(), placemark([style_url(url)])]);

    assert_eq!(
        element.to_xml_string(),
        "<Folder><Style id=\"0\"></Style><Placemark><styleUrl>#0</styleUrl></Placemark></Folder>"
    );
}

#[test]
fn test_highlighted_icon() {
    let highlight_placemark_style = shared_style(
        "highlightPlacemark",
        [icon_style([icon([href(
            "http://maps.google.com/mapfiles/kml/paddle/red-stars.png",
        )])])],
    );
    let normal_placemark_style = shared_style(
        "normalPlacemark",
        [icon_style([icon([href(
            "http://maps.google.com/mapfiles/kml/paddle/wht-blank.png",
        )])])],
    );
    let example_style_map = shared_style_map(
        "exampleStyleMap",
        [
            pair([
                key(StyleState::Normal),
                style_url(normal_placemark_style.url()),
            ]),
            pair([
                key(StyleState::Highlight),
                style_url(highlight_placemark_style.url()),
            ]),
        ],
    );
    let map_url = example_style_map.url();

    let element = kml(document([
        name("Highlighted Icon"),
        description("Place your mouse over the icon to see it display the new icon"),
        highlight_placemark_style.into(),
        normal_placemark_style.into(),
        example_style_map.into(),
        placemark([
            name("Roll over this icon"),
            style_url(map_url),
            point([coordinates([Coordinate::new(
                -122.0856545755255,
                37.42243077405461,
            )])]),
        ]),
    ]));

    let expected = concat!(
        "<kml xmlns=\"http://www.opengis.net/kml/2.2\">",
        "<Document>",
        "<name>Highlighted Icon</name>",
        "<description>Place your mouse over the icon to see it display the new icon</description>",
        "<Style id=\"highlightPlacemark\">",
        "<IconStyle>",
        "<Icon>",
        "<href>http://maps.google.com/mapfiles/kml/paddle/red-stars.png</href>",
        "</Icon>",
        "</IconStyle>",
        "</Style>",
        "<Style id=\"normalPlacemark\">",
        "<IconStyle>",
        "<Icon>",
        "<href>http://maps.google.com/mapfiles/kml/paddle/wht-blank.png</href>",
        "</Icon>",
        "</IconStyle>",
        "</Style>",
        "<StyleMap id=\"exampleStyleMap\">",
        "<Pair>",
        "<key>normal</key>",
        "<styleUrl>#normalPlacemark</styleUrl>",
        "</Pair>",
        "<Pair>",
        "<key>highlight</key>",
        "<styleUrl>#highlightPlacemark</styleUrl>",
        "</Pair>",
        "</StyleMap>",
        "<Placemark>",
        "<name>Roll over this icon</name>",
        "<styleUrl>#exampleStyleMap</styleUrl>",
        "<Point>",
        "<coordinates>-122.0856545755255,37.42243077405461</coordinates>",
        "</Point>",
        "</Placemark>",
        "</Document>",
        "</kml>",
    );
    assert_eq!(element.to_xml_string(), expected);
}

#[test]
fn test_trail_head_type_schema() {
    let element = kml(document([schema(
        "TrailHeadTypeId",
        "TrailHeadType",
        [
            simple_field(
                "TrailHeadName",
                "string",
                [display_name("<b>Trail Head Name</b>")],
            ),
            simple_field(
                "TrailLength",
                "double",
                [display_name("<i>The length in miles</i>")],
            ),
            simple_field(
                "ElevationGain",
                "int",
                [display_name("<i>change in altitude</i>")],
            ),
        ],
    )]));

    let expected = concat!(
        "<kml xmlns=\"http://www.opengis.net/kml/2.2\">",
        "<Document>",
        "<Schema id=\"TrailHeadTypeId\" name=\"TrailHeadType\">",
        "<SimpleField name=\"TrailHeadName\" type=\"string\">",
        "<displayName>&lt;b&gt;Trail Head Name&lt;/b&gt;</displayName>",
        "</SimpleField>",
        "<SimpleField name=\"TrailLength\" type=\"double\">",
        "<displayName>&lt;i&gt;The length in miles&lt;/i&gt;</displayName>",
        "</SimpleField>",
        "<SimpleField name=\"ElevationGain\" type=\"int\">",
        "<displayName>&lt;i&gt;change in altitude&lt;/i&gt;</displayName>",
        "</SimpleField>",
        "</Schema>",
        "</Document>",
        "</kml>",
    );
    assert_eq!(element.to_xml_string(), expected);
}

#[test]
fn test_write_empty_placemark() {
    let element = kml(placemark([]));
    assert_eq!(
        write_document(&element),
        format!(
            "{PROLOG}<kml xmlns=\"http://www.opengis.net/kml/2.2\"><Placemark></Placemark></kml>"
        )
    );
}

#[test]
fn test_write_simple_placemark() {
    let element = kml(placemark([
        name("Simple placemark"),
        description(
            "Attached to the ground. Intelligently places itself at the height of the underlying terrain.",
        ),
        point([coordinates([Coordinate::new(
            -122.0822035425683,
            37.42228990140251,
        )])]),
    ]));

    let expected = concat!(
        "<kml xmlns=\"http://www.opengis.net/kml/2.2\">",
        "<Placemark>",
        "<name>Simple placemark</name>",
        "<description>Attached to the ground. Intelligently places itself at the height of the underlying terrain.</description>",
        "<Point>",
        "<coordinates>-122.0822035425683,37.42228990140251</coordinates>",
        "</Point>",
        "</Placemark>",
        "</kml>",
    );
    assert_eq!(write_document(&element), format!("{PROLOG}{expected}"));
}

#[test]
fn test_write_entity_references() {
    let element = kml(document([placemark([
        name("Entity references example"),
        description(concat!(
            "<h1>Entity references are hard to type!</h1>",
            "<p><font color=\"red\">Text is <i>more readable</i> and ",
            "<b>easier to write</b> when you can avoid using entity ",
            "references.</font></p>",
        )),
        point([coordinates([Coordinate::new(102.594411, 14.998518)])]),
    ])]));

    let expected = concat!(
        "<kml xmlns=\"http://www.opengis.net/kml/2.2\">",
        "<Document>",
        "<Placemark>",
        "<name>Entity references example</name>",
        "<description>",
        "&lt;h1&gt;Entity references are hard to type!&lt;/h1&gt;",
        "&lt;p&gt;&lt;font color=&#34;red&#34;&gt;Text is ",
        "&lt;i&gt;more readable&lt;/i&gt; ",
        "and &lt;b&gt;easier to write&lt;/b&gt; ",
        "when you can avoid using entity references.&lt;/font&gt;&lt;/p&gt;",
        "</description>",
        "<Point>",
        "<coordinates>102.594411,14.998518</coordinates>",
        "</Point>",
        "</Placemark>",
        "</Document>",
        "</kml>",
    );
    assert_eq!(write_document(&element), format!("{PROLOG}{expected}"));
}

#[test]
fn test_write_ground_overlays() {
    let element = kml(folder([
        name("Ground Overlays"),
        description("Examples of ground overlays"),
        ground_overlay([
            name("Large-scale overlay on terrain"),
            description("Overlay shows Mount Etna erupting on July 13th, 2001."),
            icon([href(
                "http://developers.google.com/kml/documentation/images/etna.jpg",
            )]),
            lat_lon_box([
                north(37.91904192681665),
                south(37.46543388598137),
                east(15.35832653742206),
                west(14.60128369746704),
                rotation(-0.1556640799496235),
            ]),
        ]),
    ]));

    let expected = concat!(
        "<kml xmlns=\"http://www.opengis.net/kml/2.2\">",
        "<Folder>",
        "<name>Ground Overlays</name>",
        "<description>Examples of ground overlays</description>",
        "<GroundOverlay>",
        "<name>Large-scale overlay on terrain</name>",
        "<description>Overlay shows Mount Etna erupting on July 13th, 2001.</description>",
        "<Icon>",
        "<href>http://developers.google.com/kml/documentation/images/etna.jpg</href>",
        "</Icon>",
        "<LatLonBox>",
        "<north>37.91904192681665</north>",
        "<south>37.46543388598137</south>",
        "<east>15.35832653742206</east>",
        "<west>14.60128369746704</west>",
        "<rotation>-0.1556640799496235</rotation>",
        "</LatLonBox>",
        "</GroundOverlay>",
        "</Folder>",
        "</kml>",
    );
    assert_eq!(write_document(&element), format!("{PROLOG}{expected}"));
}

#[test]
fn test_write_the_pentagon() {
    let outer = [
        [-77.05788457660967, 38.87253259892824, 100.0],
        [-77.05465973756702, 38.87291016281703, 100.0],
        [-77.05315536854791, 38.87053267794386, 100.0],
        [-77.05552622493516, 38.868757801256, 100.0],
        [-77.05844056290393, 38.86996206506943, 100.0],
        [-77.05788457660967, 38.87253259892824, 100.0],
    ];
    let inner = [
        [-77.05668055019126, 38.87154239798456, 100.0],
        [-77.05542625960818, 38.87167890344077, 100.0],
        [-77.05485125901024, 38.87076535397792, 100.0],
        [-77.05577677433152, 38.87008686581446, 100.0],
        [-77.05691162017543, 38.87054446963351, 100.0],
        [-77.05668055019126, 38.87154239798456, 100.0],
    ];

    let element = kml(placemark([
        name("The Pentagon"),
        polygon([
            extrude(true),
            altitude_mode(AltitudeMode::RelativeToGround),
            outer_boundary_is(linear_ring([coordinates(outer)])),
            inner_boundary_is(linear_ring([coordinates(inner)])),
        ]),
    ]));

    let expected = concat!(
        "<kml xmlns=\"http://www.opengis.net/kml/2.2\">",
        "<Placemark>",
        "<name>The Pentagon</name>",
        "<Polygon>",
        "<extrude>1</extrude>",
        "<altitudeMode>relativeToGround</altitudeMode>",
        "<outerBoundaryIs>",
        "<LinearRing>",
        "<coordinates>",
        "-77.05788457660967,38.87253259892824,100 ",
        "-77.05465973756702,38.87291016281703,100 ",
        "-77.0531553685479,38.87053267794386,100 ",
        "-77.05552622493516,38.868757801256,100 ",
        "-77.05844056290393,38.86996206506943,100 ",
        "-77.05788457660967,38.87253259892824,100",
        "</coordinates>",
        "</LinearRing>",
        "</outerBoundaryIs>",
        "<innerBoundaryIs>",
        "<LinearRing>",
        "<coordinates>",
        "-77.05668055019126,38.87154239798456,100 ",
        "-77.05542625960818,38.87167890344077,100 ",
        "-77.05485125901023,38.87076535397792,100 ",
        "-77.05577677433152,38.87008686581446,100 ",
        "-77.05691162017543,38.87054446963351,100 ",
        "-77.05668055019126,38.87154239798456,100",
        "</coordinates>",
        "</LinearRing>",
        "</innerBoundaryIs>",
        "</Polygon>",
        "</Placemark>",
        "</kml>",
    );
    assert_eq!(write_document(&element), format!("{PROLOG}{expected}"));
}

#[test]
fn test_write_gx_placemark() {
    let element = gx_kml(placemark([]));
    assert_eq!(
        write_document(&element),
        format!(
            "{PROLOG}<kml xmlns=\"http://www.opengis.net/kml/2.2\" xmlns:gx=\"http://www.google.com/kml/ext/2.2\"><Placemark></Placemark></kml>"
        )
    );
}

#[test]
fn test_write_gx_track() {
    let track = gx_track([
        when(at(2, 2, 9)),
        when(at(2, 2, 35)),
        when(at(2, 2, 44)),
        when(at(2, 2, 53)),
        when(at(2, 2, 54)),
        when(at(2, 2, 55)),
        when(at(2, 2, 56)),
        gx_coord(Coordinate::new(-122.207881, 37.371915).with_alt(156.000000)),
        gx_coord(Coordinate::new(-122.205712, 37.373288).with_alt(152.000000)),
        gx_coord(Coordinate::new(-122.204678, 37.373939).with_alt(147.000000)),
        gx_coord(Coordinate::new(-122.203572, 37.374630).with_alt(142.199997)),
        gx_coord(Coordinate::new(-122.203451, 37.374706).with_alt(141.800003)),
        gx_coord(Coordinate::new(-122.203329, 37.374780).with_alt(141.199997)),
        gx_coord(Coordinate::new(-122.203207, 37.374857).with_alt(140.199997)),
    ]);
    let expected = concat!(
        "<kml xmlns=\"http://www.opengis.net/kml/2.2\" xmlns:gx=\"http://www.google.com/kml/ext/2.2\">",
        "<Folder>",
        "<Placemark>",
        "<gx:Track>",
        "<when>2010-05-28T02:02:09Z</when>",
        "<when>2010-05-28T02:02:35Z</when>",
        "<when>2010-05-28T02:02:44Z</when>",
        "<when>2010-05-28T02:02:53Z</when>",
        "<when>2010-05-28T02:02:54Z</when>",
        "<when>2010-05-28T02:02:55Z</when>",
        "<when>2010-05-28T02:02:56Z</when>",
        "<gx:coord>-122.207881 37.371915 156</gx:coord>",
        "<gx:coord>-122.205712 37.373288 152</gx:coord>",
        "<gx:coord>-122.204678 37.373939 147</gx:coord>",
        "<gx:coord>-122.203572 37.37463 142.199997</gx:coord>",
        "<gx:coord>-122.203451 37.374706 141.800003</gx:coord>",
        "<gx:coord>-122.203329 37.37478 141.199997</gx:coord>",
        "<gx:coord>-122.203207 37.374857 140.199997</gx:coord>",
        "</gx:Track>",
        "</Placemark>",
        "</Folder>",
        "</kml>",
    );

    // Detection and the explicit extension root agree for a tree holding gx tags
    let detected = kml(folder([placemark([track.clone()])]));
    let explicit = gx_kml(folder([placemark([track])]));

    assert_eq!(write_document(&detected), format!("{PROLOG}{expected}"));
    assert_eq!(write_document(&explicit), format!("{PROLOG}{expected}"));
}

#[test]
fn test_colors_in_styles() {
    let element = style([
        line_style([color(Color::from_kml_hex("7f00ffff").unwrap()), width(4.0)]),
        poly_style([color(Color::white().with_alpha(0.0)), fill(false)]),
    ]);
    assert_eq!(
        element.to_xml_string(),
        concat!(
            "<Style>",
            "<LineStyle><color>7f00ffff</color><width>4</width></LineStyle>",
            "<PolyStyle><color>00ffffff</color><fill>0</fill></PolyStyle>",
            "</Style>",
        )
    );
}

#[test]
fn test_quotes_in_descriptions() {
    let element = placemark([
        description(r#"<font color="red">it's</font>"#),
        link_snippet(2, "Tom's \"place\""),
    ]);
    assert_eq!(
        element.to_xml_string(),
        concat!(
            "<Placemark>",
            "<description>&lt;font color=&#34;red&#34;&gt;it&#39;s&lt;/font&gt;</description>",
            "<linkSnippet maxLines=\"2\">Tom&#39;s &#34;place&#34;</linkSnippet>",
            "</Placemark>",
        )
    );
}
