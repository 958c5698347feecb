//! Test fixtures for REST API testing.
//!
//! Provides a small library catalog covering the shapes the API has to deal
//! with: complete records, records without a resolvable default file, and
//! records missing optional metadata.

use cdnjs_index::types::LibraryRecord;
use serde_json::{Value, json};

/// Number of records in [`catalog`].
pub const CATALOG_SIZE: usize = 14;

/// Returns the fixture catalog as JSON, in catalog order.
pub fn catalog_json() -> Value {
    json!([
        {
            "name": "twitter-bootstrap",
            "filename": "js/bootstrap.min.js",
            "description": "The most popular front-end framework for developing responsive, mobile first projects on the web.",
            "version": "5.3.3",
            "keywords": ["css", "less", "mobile-first", "responsive", "front-end", "framework", "web"],
            "alternativeNames": ["bootstrap"],
            "fileType": "js",
            "github": {"user": "twbs", "repo": "bootstrap", "stargazers_count": 170000},
            "license": "MIT",
            "homepage": "https://getbootstrap.com/",
            "repository": {"type": "git", "url": "https://github.com/twbs/bootstrap.git"},
            "author": "The Bootstrap Authors",
            "originalName": "bootstrap",
            "sri": "sha512-ykZ1QQr0Jy/4ZkvKuqWn4iF3lqPZyij9iRv6sGqLRdTPkY69YX6+7wvVGmsdBbiIfN/8OdsI7HABjvEok6ZopQ==",
            "objectID": "twitter-bootstrap",
            "maintainers": [{"name": "mdo"}, {"name": "fat"}],
            "repositories": [{"url": "https://github.com/twbs/bootstrap"}]
        },
        {
            "name": "backbone.js",
            "filename": "backbone-min.js",
            "description": "Give your JS App some Backbone with Models, Views, Collections, and Events.",
            "version": "1.6.0",
            "keywords": ["model", "view", "controller", "router", "server", "client", "browser"],
            "fileType": "js",
            "github": {"user": "jashkenas", "repo": "backbone"},
            "license": "MIT",
            "homepage": "http://backbonejs.org/",
            "repository": {"type": "git", "url": "git://github.com/jashkenas/backbone.git"},
            "author": "Jeremy Ashkenas",
            "originalName": "backbone",
            "objectID": "backbone.js"
        },
        {
            "name": "backbone.marionette",
            "filename": "backbone.marionette.min.js",
            "description": "The Backbone Framework",
            "version": "4.1.2",
            "keywords": ["backbone", "backbone.js", "framework", "client", "browser"],
            "github": {"user": "marionettejs", "repo": "backbone.marionette"},
            "license": "MIT",
            "objectID": "backbone.marionette"
        },
        {
            "name": "backbone-relational",
            "filename": "backbone-relational.min.js",
            "description": "Get and set relations (one-to-one, one-to-many, many-to-one) for Backbone models",
            "version": "0.10.0",
            "keywords": ["backbone.js", "relations", "nested"],
            "github": {"user": "PaulUithol", "repo": "Backbone-relational"},
            "objectID": "backbone-relational"
        },
        {
            "name": "backbone.localStorage",
            "filename": "backbone.localStorage-min.js",
            "version": "2.0.2",
            "keywords": ["backbone.js", "localStorage"],
            "objectID": "backbone.localStorage"
        },
        {
            "name": "jquery",
            "filename": "jquery.min.js",
            "description": "JavaScript library for DOM operations",
            "version": "3.7.1",
            "keywords": ["jquery", "library", "ajax", "framework", "toolkit", "popular"],
            "github": {"user": "jquery", "repo": "jquery"},
            "license": "MIT",
            "homepage": "http://jquery.com/",
            "objectID": "jquery"
        },
        {
            "name": "lodash.js",
            "filename": "lodash.min.js",
            "description": "Lodash modular utilities.",
            "version": "4.17.21",
            "keywords": ["modules", "stdlib", "util"],
            "github": {"user": "lodash", "repo": "lodash"},
            "license": "MIT",
            "objectID": "lodash.js"
        },
        {
            "name": "react",
            "filename": "umd/react.production.min.js",
            "description": "React is a JavaScript library for building user interfaces.",
            "version": "18.2.0",
            "keywords": ["react"],
            "github": {"user": "facebook", "repo": "react"},
            "license": "MIT",
            "objectID": "react"
        },
        {
            "name": "vue",
            "filename": "vue.global.prod.min.js",
            "description": "The progressive JavaScript framework for building modern web UI.",
            "version": "3.4.21",
            "keywords": ["vue"],
            "github": {"user": "vuejs", "repo": "core"},
            "license": "MIT",
            "objectID": "vue"
        },
        {
            "name": "no-default-file",
            "description": "A library whose default file could not be resolved",
            "version": "1.0.0",
            "keywords": null,
            "objectID": "no-default-file"
        },
        {
            "name": "no-version",
            "filename": "index.js",
            "objectID": "no-version"
        },
        {
            "name": "d3",
            "filename": "d3.min.js",
            "description": "A JavaScript visualization library for HTML and SVG.",
            "version": "7.8.5",
            "keywords": ["dom", "visualization", "svg", "animation", "canvas"],
            "github": {"user": "d3", "repo": "d3"},
            "license": "ISC",
            "objectID": "d3"
        },
        {
            "name": "moment.js",
            "filename": "moment.min.js",
            "description": "Parse, validate, manipulate, and display dates",
            "version": "2.30.1",
            "keywords": ["date", "moment", "time"],
            "github": {"user": "moment", "repo": "moment"},
            "license": "MIT",
            "objectID": "moment.js"
        },
        {
            "name": "font-awesome",
            "filename": "css/all.min.css",
            "description": "The iconic SVG, font, and CSS toolkit",
            "version": "6.5.1",
            "keywords": ["font", "awesome", "fontawesome", "icon", "svg", "bootstrap"],
            "fileType": "css",
            "github": {"user": "FortAwesome", "repo": "Font-Awesome"},
            "license": "(CC-BY-4.0 AND OFL-1.1 AND MIT)",
            "objectID": "font-awesome"
        }
    ])
}

/// Returns the fixture catalog as records.
pub fn catalog() -> Vec<LibraryRecord> {
    serde_json::from_value(catalog_json()).expect("fixture catalog is valid")
}
