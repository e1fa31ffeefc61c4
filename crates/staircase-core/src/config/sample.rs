/// Starter configuration with one example of each entry feature.
pub const SAMPLE_CONFIG: &str = r#"# Staircase challenge configuration.

[challenge]
# The challenge level you've chosen. Casual and intermediate lists may be
# under- or overfull.
level = 10
# casual | intermediate | hardcore | antithetical
mode = "casual"
# Prefer lower slots for games that have not yet reached their goal.
shift_low = false

[display]
# Justify the staircase to the right using blank badges.
justify_right = false
# yellow (aka gold) | blue | green | pink | purple | random | rowrandom
color_scheme = "yellow"

[profile]
# Your BGG user name, used to link your logged plays. Remove to disable.
# user_name = "your user name here"
# Start of the logging window, defaults to January 1 of the current year.
# start_date = "2022-06-26"

# Title, BGG id, plays, and maximum plays.
[[games]]
title = "Fantasy Realms"
id = 223040
plays = 2

# An empty title accepts BGG's default title for the id (Morels).
[[games]]
title = ""
id = 122298
plays = 2

# No id lists the title without a hyperlink.
[[games]]
title = "Marvel United"
plays = 4

# Never placed above slot 3 regardless of where it would otherwise sort.
[[games]]
title = "Star Wars: Unlock!"
id = 312267
plays = 3
max_plays = 3

# The title overrides BGG's, the link still points at Dominion.
[[games]]
title = "Dominion: Override"
id = 36218
plays = 5

# Plays beyond the challenge size are accepted; only what counts is shown.
[[games]]
title = "Res Arcana"
id = 262712
plays = 30

# Zero plays pre-declares a game.
[[games]]
title = "Radlands"
id = 329082
plays = 0
"#;
