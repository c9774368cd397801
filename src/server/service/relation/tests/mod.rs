mod add;

use larder_test_utils::prelude::*;

use super::*;
